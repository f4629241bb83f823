//! Structs decoded field by field

use crate::error::EnvError;
use crate::snapshot::Snapshot;

/// A struct value together with whether any of its fields was populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled<T> {
    value: T,
    populated: bool,
}

impl<T> Assembled<T> {
    /// Wrap an assembled value
    pub fn new(value: T, populated: bool) -> Self {
        Self { value, populated }
    }

    /// Whether at least one field was populated
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// The value, whether populated or not
    pub fn into_value(self) -> T {
        self.value
    }

    /// The value if at least one field was populated
    pub fn into_populated(self) -> Option<T> {
        self.populated.then_some(self.value)
    }
}

/// A struct whose fields are decoded from environment variables.
///
/// Implement it with `#[derive(FromEnv)]`. The derive also implements
/// [`EnvField`](crate::EnvField), so a `FromEnv` struct can be a field of
/// another one, directly or wrapped in `Option`.
pub trait FromEnv: Sized {
    /// Decode every field in declaration order.
    ///
    /// Unpopulated fields keep their default. The first failing field aborts
    /// the walk.
    fn walk(snapshot: &Snapshot) -> Result<Assembled<Self>, EnvError>;

    /// Decode the struct, or `None` when no field was populated.
    fn decode(snapshot: &Snapshot) -> Result<Option<Self>, EnvError> {
        Self::walk(snapshot).map(Assembled::into_populated)
    }

    /// Decode the struct from an explicit snapshot
    fn from_snapshot(snapshot: &Snapshot) -> Result<Self, EnvError> {
        Self::walk(snapshot).map(Assembled::into_value)
    }

    /// Load the struct from the process environment
    ///
    /// # Errors
    ///
    /// - A variable's value cannot be parsed into the field's type
    /// - A `{VAR}_FILE` file cannot be read
    fn from_env() -> Result<Self, EnvError> {
        Self::from_snapshot(&Snapshot::capture())
    }
}
