//! `Option<T>` around any other shape
//!
//! Absence of the inner value resolves to `None` instead of an error, at any
//! depth: `Option<u16>`, `Option<Vec<u8>>`, `Option<HashMap<String, u8>>` and
//! `Option<Nested>` all behave the same way. Failures of the inner conversion
//! propagate unchanged.
//!
//! Empty text is always absent under `Option`, even for `String` and `bool`
//! which read it as a value of their own elsewhere. `VAR=` gives `None`, and
//! so does an empty element of a `Vec<Option<bool>>`.

use crate::error::EnvError;
use crate::field::EnvField;
use crate::scalar::FromEnvText;
use crate::snapshot::{Snapshot, Source};

impl<T: FromEnvText> FromEnvText for Option<T> {
    fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
        if text.is_empty() {
            return Ok(None);
        }
        Ok(T::from_env_text(text)?.map(Some))
    }
}

impl<T: EnvField> EnvField for Option<T> {
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError> {
        Ok(T::from_optional_env_field(snapshot, source)?.map(Some))
    }
}
