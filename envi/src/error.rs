//! Error types for environment variable decoding

/// Errors that can occur while decoding environment variables into a struct.
///
/// Text that cannot be converted surfaces as [`EnvError::Parse`]. Each layer of
/// the value it was meant for wraps it once more: the sequence position, the
/// map entry, the variable name and finally the struct field. Walking the
/// `source` chain therefore yields a breadcrumb from the outermost field down
/// to the offending text.
///
/// An unset or empty variable is never an error. It leaves the field at its
/// default value.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Text does not match the grammar of the target kind.
    #[error("Failed to parse {value:?} as {kind}: {message}")]
    Parse {
        /// Type name of the target kind (e.g. `u16`)
        kind: &'static str,
        /// The offending text
        value: String,
        /// Error message from the underlying parser
        message: String,
    },

    /// One element of a comma-separated sequence could not be converted.
    #[error("Invalid sequence element {index} ({value:?}) of kind {kind}: {source}")]
    Element {
        /// Zero-based position of the element
        index: usize,
        /// The element text after trimming
        value: String,
        /// Type name of the element kind
        kind: &'static str,
        /// Why the element failed
        source: Box<EnvError>,
    },

    /// The suffix of a prefixed variable could not be converted into a map key.
    #[error("Invalid map key in '{key}' of kind {kind}: {source}")]
    MapKey {
        /// Full name of the environment variable
        key: String,
        /// Type name of the map key kind
        kind: &'static str,
        /// Why the key failed
        source: Box<EnvError>,
    },

    /// The value of a prefixed variable could not be converted into a map value.
    #[error("Invalid map value in '{key}' of kind {kind}: {source}")]
    MapValue {
        /// Full name of the environment variable
        key: String,
        /// Type name of the map value kind
        kind: &'static str,
        /// Why the value failed
        source: Box<EnvError>,
    },

    /// The value of a named environment variable could not be converted.
    #[error("Environment variable '{name}': {source}")]
    Variable {
        /// Name of the environment variable
        name: String,
        /// Why the conversion failed
        source: Box<EnvError>,
    },

    /// A struct field failed to decode.
    #[error("Failed to decode field '{field}': {source}")]
    Field {
        /// Name of the struct field
        field: &'static str,
        /// Why the field failed
        source: Box<EnvError>,
    },

    /// Failed to read from a file specified by a `{VAR}_FILE` environment variable.
    ///
    /// Only fields annotated with `#[env(from_file)]` read files.
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the `{VAR}_FILE` environment variable (e.g. "API_KEY_FILE")
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },
}

impl EnvError {
    /// Create a parse error for the target type `T`
    pub fn parse_error<T>(value: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            kind: std::any::type_name::<T>(),
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Tag an error with the environment variable it came from
    pub fn variable(name: impl Into<String>, source: EnvError) -> Self {
        Self::Variable {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Tag an error with the struct field it came from
    pub fn field(field: &'static str, source: EnvError) -> Self {
        Self::Field {
            field,
            source: Box::new(source),
        }
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &EnvError {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }

    /// Names of the struct fields the error passed through, outermost first.
    ///
    /// ```
    /// use envi::EnvError;
    ///
    /// let err = EnvError::field(
    ///     "database",
    ///     EnvError::field("port", EnvError::parse_error::<u16>("http", "invalid digit")),
    /// );
    /// assert_eq!(err.field_path(), ["database", "port"]);
    /// ```
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = Some(self);
        while let Some(err) = current {
            if let Self::Field { field, .. } = err {
                path.push(*field);
            }
            current = err.inner();
        }
        path
    }

    fn inner(&self) -> Option<&EnvError> {
        match self {
            Self::Element { source, .. }
            | Self::MapKey { source, .. }
            | Self::MapValue { source, .. }
            | Self::Variable { source, .. }
            | Self::Field { source, .. } => Some(source),
            Self::Parse { .. } | Self::FileRead { .. } => None,
        }
    }
}
