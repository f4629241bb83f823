//! Derive macro implementation for envi

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `FromEnv` derive macro
///
/// Implements `envi::FromEnv` and `envi::EnvField` for a struct with named
/// fields. Fields are decoded in declaration order; the struct counts as
/// populated when at least one field was.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to every `name` in the struct.
///   Unnamed map fields and nested structs are not scoped by it
///
/// **Field-level**:
/// - `#[env(name = "VAR")]`: Environment variable (or map prefix) to read.
///   Ignored on nested struct fields, which read the variables named by their
///   own fields
/// - `#[env(default = value)]`: Value used when the field is not populated
/// - `#[env(from_file)]`: Support the `{VAR}_FILE` pattern
///
/// # Example
///
/// See the `envi` crate documentation for usage examples.
#[proc_macro_derive(FromEnv, attributes(env))]
pub fn derive_from_env(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let struct_attrs = StructAttrs::from_input(input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "FromEnv only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "FromEnv only supports structs",
            ));
        }
    };

    let mut loaders = Vec::with_capacity(fields.len());
    let mut initializers = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "FromEnv requires named fields"));
        };
        let field_type = &field.ty;
        let attrs = FieldAttrs::from_field(field)?;

        let key = match &attrs.name {
            Some(name) => {
                let env_var_name = format!("{}{}", struct_attrs.prefix, name);
                quote! { ::std::option::Option::Some(#env_var_name) }
            }
            None => quote! { ::std::option::Option::None },
        };
        let from_file = attrs.from_file;

        let default = match &attrs.default {
            Some(expr) => quote! { #expr },
            None => quote! { ::std::default::Default::default() },
        };

        let binding = format_ident!("__envi_field_{}", index);
        let label = field_name.to_string();

        loaders.push(quote! {
            let #binding: #field_type = match ::envi::de::field::<#field_type>(
                __envi_snapshot,
                ::envi::Source::new(#key, #from_file),
                #label,
            )? {
                ::std::option::Option::Some(__envi_value) => {
                    __envi_populated = true;
                    __envi_value
                }
                ::std::option::Option::None => #default,
            };
        });
        initializers.push(quote! { #field_name: #binding });
    }

    Ok(quote! {
        impl #impl_generics ::envi::FromEnv for #struct_name #ty_generics #where_clause {
            fn walk(
                __envi_snapshot: &::envi::Snapshot,
            ) -> ::std::result::Result<::envi::Assembled<Self>, ::envi::EnvError> {
                #[allow(unused_mut)]
                let mut __envi_populated = false;
                #(#loaders)*
                ::std::result::Result::Ok(::envi::Assembled::new(
                    Self { #(#initializers),* },
                    __envi_populated,
                ))
            }
        }

        impl #impl_generics ::envi::EnvField for #struct_name #ty_generics #where_clause {
            fn from_env_field(
                snapshot: &::envi::Snapshot,
                _source: ::envi::Source<'_>,
            ) -> ::std::result::Result<::std::option::Option<Self>, ::envi::EnvError> {
                <Self as ::envi::FromEnv>::decode(snapshot)
            }
        }
    })
}
