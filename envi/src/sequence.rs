//! Comma-separated sequences: fixed-length arrays and vectors
//!
//! The text is split on `,` and every element is trimmed of surrounding
//! whitespace before it is converted with the element kind's rules. An element
//! that converts to "absent" (e.g. an empty token for a numeric kind) keeps the
//! element type's default value.
//!
//! Empty text as a whole is absent, so an unset list stays at its default.

use crate::error::EnvError;
use crate::scalar::FromEnvText;

/// Split `text` into trimmed elements.
fn elements(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim)
}

fn convert_element<T: FromEnvText + Default>(index: usize, element: &str) -> Result<T, EnvError> {
    match T::from_env_text(element) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(e) => Err(EnvError::Element {
            index,
            value: element.to_owned(),
            kind: std::any::type_name::<T>(),
            source: Box::new(e),
        }),
    }
}

/// Writes up to `N` elements. Missing trailing elements keep their default,
/// extra elements are discarded.
impl<T, const N: usize> FromEnvText for [T; N]
where
    T: FromEnvText + Default,
{
    fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
        if text.is_empty() {
            return Ok(None);
        }

        let mut out: [T; N] = std::array::from_fn(|_| T::default());
        for (index, (slot, element)) in out.iter_mut().zip(elements(text)).enumerate() {
            *slot = convert_element(index, element)?;
        }
        Ok(Some(out))
    }
}

/// Holds exactly one entry per token, including empty tokens.
impl<T> FromEnvText for Vec<T>
where
    T: FromEnvText + Default,
{
    fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
        if text.is_empty() {
            return Ok(None);
        }

        elements(text)
            .enumerate()
            .map(|(index, element)| convert_element(index, element))
            .collect::<Result<Vec<T>, _>>()
            .map(Some)
    }
}
