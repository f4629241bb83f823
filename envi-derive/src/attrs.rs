//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from the struct
//! and its fields during macro expansion.

use syn::{DeriveInput, Expr, Field, LitStr, Type};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable the field is bound to.
    ///
    /// If `None`, the field is only populated when its type is a nested struct
    /// or a map.
    pub name: Option<String>,

    /// Expression used when the field is not populated.
    ///
    /// If `None`, `Default::default()` is used.
    pub default: Option<Expr>,

    /// Enable the `{VAR}_FILE` pattern for reading secrets from mounted files.
    pub from_file: bool,
}

impl FieldAttrs {
    /// Extract, parse and validate `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new_spanned(name, "name must not be empty"));
                    }
                    attrs.name = Some(name.value());
                    return Ok(());
                }

                // default = expr
                if meta.path.is_ident("default") {
                    attrs.default = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                // from_file
                if meta.path.is_ident("from_file") {
                    attrs.from_file = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        attrs.validate(field)?;
        Ok(attrs)
    }

    /// Reject combinations that cannot work.
    fn validate(&self, field: &Field) -> syn::Result<()> {
        if self.default.is_some() && is_option(&field.ty) {
            return Err(syn::Error::new_spanned(
                field,
                "Option<T> fields cannot have default attribute (they default to None automatically)",
            ));
        }

        if self.from_file && self.name.is_none() {
            return Err(syn::Error::new_spanned(
                field,
                "from_file requires a variable name: #[env(name = \"...\", from_file)]",
            ));
        }

        Ok(())
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every field `name` declared in the struct.
    pub prefix: String,
}

impl StructAttrs {
    /// Extract and parse struct-level `#[env(...)]` attributes.
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &input.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let prefix: LitStr = meta.value()?.parse()?;
                    attrs.prefix = prefix.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(attrs)
    }
}

/// Whether the type is spelled `Option<...>`
fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "Option")
            .unwrap_or(false)
    } else {
        false
    }
}
