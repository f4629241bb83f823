//! Field-level decoding

use crate::de;
use crate::error::EnvError;
use crate::scalar::FromEnvText;
use crate::snapshot::{Snapshot, Source};
use num_complex::Complex;
use ordered_float::OrderedFloat;

/// A type that can be the type of a field in a `#[derive(FromEnv)]` struct.
///
/// Text-level kinds read the variable named by the [`Source`]. Maps scan the
/// snapshot for variables sharing the source's prefix. Nested structs ignore
/// the source and decode their own fields.
///
/// `Ok(None)` means the field was not populated and keeps its default.
pub trait EnvField: Sized {
    /// Decode the field from `snapshot`
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError>;

    /// Decode the field as the payload of an `Option<Self>` field.
    ///
    /// Kinds read from a single variable treat an empty variable as absent
    /// here, so `Option<String>` resolves to `None` for `VAR=`.
    fn from_optional_env_field(
        snapshot: &Snapshot,
        source: Source<'_>,
    ) -> Result<Option<Self>, EnvError> {
        Self::from_env_field(snapshot, source)
    }
}

macro_rules! impl_env_field_via_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvField for $ty {
                fn from_env_field(
                    snapshot: &Snapshot,
                    source: Source<'_>,
                ) -> Result<Option<Self>, EnvError> {
                    de::text_field::<Self>(snapshot, source)
                }

                fn from_optional_env_field(
                    snapshot: &Snapshot,
                    source: Source<'_>,
                ) -> Result<Option<Self>, EnvError> {
                    de::optional_text_field::<Self>(snapshot, source)
                }
            }
        )*
    };
}

impl_env_field_via_text!(
    String,
    i8, i16, i32, i64, isize,
    u8, u16, u32, u64, usize,
    f32, f64,
    OrderedFloat<f32>, OrderedFloat<f64>,
    Complex<f32>, Complex<f64>,
);

/// An empty variable leaves the field unpopulated. Its value is `false`
/// either way, but an enclosing struct does not count as set because of it.
impl EnvField for bool {
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError> {
        de::optional_text_field::<Self>(snapshot, source)
    }
}

impl<T, const N: usize> EnvField for [T; N]
where
    T: FromEnvText + Default,
{
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError> {
        de::text_field::<Self>(snapshot, source)
    }
}

impl<T> EnvField for Vec<T>
where
    T: FromEnvText + Default,
{
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError> {
        de::text_field::<Self>(snapshot, source)
    }
}
