//! Decode environment variables into strongly-typed, nested structs
//!
//! `envi` fills a struct from the process environment. Each field names the
//! variable it reads with `#[env(name = "...")]`; the field's type decides how
//! the text is converted.
//!
//! # Features
//!
//! - **Scalars**: `String`, `bool`, signed and unsigned integers, floats and
//!   complex numbers
//! - **Sequences**: comma-separated `[T; N]` and `Vec<T>`
//! - **Maps**: `HashMap` / `BTreeMap` collected from every variable sharing a
//!   prefix, with float and complex keys through [`OrderedFloat`]
//! - **Nested structs**: decoded recursively, no annotation needed
//! - **Optionals**: `Option<T>` around any of the above
//! - **File-based secrets**: `#[env(from_file)]` reads `{VAR}_FILE`
//!
//! # Value Parsing
//!
//! - Strings are taken verbatim: `DATABASE_URL=postgres://localhost/db`
//! - Numbers use Rust's base-10 literal grammar: `MAX_CONNECTIONS=42`
//! - Complex numbers: `IMPEDANCE=3+6i`
//! - Booleans: `1`, `t`, `true`, `TRUE`, `True` and their `0`/`f`/`false`
//!   counterparts; any other non-empty text is `true`, empty text is `false`
//!   and leaves the field unpopulated
//! - Sequences: `PORTS=80, 443, 8080`
//! - Maps: `LIMITS_cpu=2`, `LIMITS_memory=512` for a field bound to `LIMITS`
//!
//! An unset variable, or an empty one for a numeric, sequence or `Option`
//! field, leaves the field at its default instead of failing. Text that does not parse is an
//! error naming the field, the variable and the expected kind.
//!
//! # Example
//!
//! ```rust
//! use envi::{FromEnv, Snapshot};
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Default, FromEnv)]
//! struct Database {
//!     #[env(name = "DB_HOST")]
//!     host: String,
//!
//!     #[env(name = "DB_PORT", default = 5432)]
//!     port: u16,
//! }
//!
//! #[derive(Debug, FromEnv)]
//! struct Config {
//!     #[env(name = "ALLOWED_PORTS")]
//!     allowed_ports: Vec<u16>,
//!
//!     #[env(name = "LABELS")]
//!     labels: HashMap<String, String>,
//!
//!     #[env(name = "DEBUG")]
//!     debug: bool,
//!
//!     database: Option<Database>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let snapshot: Snapshot = [
//!     ("ALLOWED_PORTS", "80, 443"),
//!     ("LABELS_team", "core"),
//!     ("DB_HOST", "localhost"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = Config::from_snapshot(&snapshot)?;
//! assert_eq!(config.allowed_ports, [80, 443]);
//! assert_eq!(config.labels["team"], "core");
//! assert!(!config.debug);
//!
//! let database = config.database.expect("DB_HOST is set");
//! assert_eq!(database.host, "localhost");
//! assert_eq!(database.port, 5432);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "VAR")]`
//!
//! Bind a field to an environment variable. Fields of scalar, sequence and
//! optional types without a name are never populated. Map fields use the name
//! as a prefix: `#[env(name = "LIMITS")]` collects `LIMITS_*`. Nested struct
//! fields need no name, and a name given to one is ignored: the nested struct
//! reads the variables its own fields name.
//!
//! ## `#[env(default = value)]`
//!
//! Value used when the variable is not set, instead of `Default::default()`.
//!
//! ```rust
//! # use envi::FromEnv;
//! #[derive(FromEnv)]
//! struct Config {
//!     #[env(name = "SERVER_ADDR", default = "127.0.0.1:8080".to_string())]
//!     server_addr: String,
//!
//!     #[env(name = "MAX_CONNECTIONS", default = 10)]
//!     max_connections: u32,
//! }
//! ```
//!
//! ## `#[env(from_file)]` - File-based Secrets
//!
//! When `VAR` is not set, read the value from the file named by `VAR_FILE`.
//! This is how Kubernetes and Docker mount secrets.
//!
//! ```rust
//! # use envi::FromEnv;
//! #[derive(FromEnv)]
//! struct Config {
//!     // Reads from API_KEY or API_KEY_FILE
//!     #[env(name = "API_KEY", from_file)]
//!     api_key: String,
//! }
//! ```
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! On the struct: prepend a prefix to every `name` declared in it. Map fields
//! without a name and nested structs are not scoped by it.

mod composite;
#[doc(hidden)]
pub mod de;
mod error;
mod field;
mod map;
mod optional;
mod scalar;
mod sequence;
mod snapshot;

pub use composite::{Assembled, FromEnv};
pub use envi_derive::FromEnv;
pub use error::EnvError;
pub use field::EnvField;
pub use num_complex::Complex;
pub use ordered_float::OrderedFloat;
pub use scalar::FromEnvText;
pub use snapshot::{Snapshot, Source};

/// Load `T` from the process environment.
///
/// ```rust
/// # use envi::FromEnv;
/// #[derive(FromEnv)]
/// struct Config {
///     #[env(name = "ENVI_DOC_LOAD_PORT", default = 8080)]
///     port: u16,
/// }
///
/// let config: Config = envi::load()?;
/// assert_eq!(config.port, 8080);
/// # Ok::<(), envi::EnvError>(())
/// ```
pub fn load<T: FromEnv>() -> Result<T, EnvError> {
    T::from_env()
}

/// Load `T` from the process environment, panicking on failure.
///
/// # Panics
///
/// Panics with the error message when any variable fails to decode.
pub fn must_load<T: FromEnv>() -> T {
    match load() {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

/// Replace `target` with `T` loaded from the process environment.
///
/// `target` is left untouched when decoding fails.
pub fn parse_into<T: FromEnv>(target: &mut T) -> Result<(), EnvError> {
    *target = T::from_env()?;
    Ok(())
}

/// Replace `target` with `T` loaded from the process environment, panicking on failure.
///
/// # Panics
///
/// Panics with the error message when any variable fails to decode.
pub fn must_parse_into<T: FromEnv>(target: &mut T) {
    if let Err(e) = parse_into(target) {
        panic!("{e}");
    }
}
