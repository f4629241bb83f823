//! Conversion of a single text value into a primitive kind

use crate::error::EnvError;
use num_complex::Complex;
use ordered_float::OrderedFloat;

/// A type that can be decoded from the text of one environment variable.
///
/// The result is tri-state:
/// - `Ok(Some(value))`: the text denoted a value
/// - `Ok(None)`: the text was empty and the kind treats that as absent
/// - `Err(_)`: the text does not match the kind's grammar
///
/// Implemented for the scalar kinds, for `[T; N]` and `Vec<T>` of them
/// (comma-separated), and for `Option<T>`.
pub trait FromEnvText: Sized {
    /// Convert `text` into `Self`
    fn from_env_text(text: &str) -> Result<Option<Self>, EnvError>;

    /// Convert the suffix of a prefixed variable into a map key.
    ///
    /// An empty suffix names no key, unless the kind reads empty text as a
    /// value of its own.
    fn from_env_key(text: &str) -> Result<Option<Self>, EnvError> {
        if text.is_empty() {
            return Ok(None);
        }
        Self::from_env_text(text)
    }
}

impl FromEnvText for String {
    fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
        Ok(Some(text.to_owned()))
    }
}

/// Never fails. Empty text reads as `false`, also as a map key.
impl FromEnvText for bool {
    fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
        Ok(Some(parse_bool(text)))
    }

    fn from_env_key(text: &str) -> Result<Option<Self>, EnvError> {
        Self::from_env_text(text)
    }
}

/// Canonical tokens map to their value, any other non-empty text is truthy.
pub(crate) fn parse_bool(text: &str) -> bool {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => true,
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => false,
        _ => true,
    }
}

macro_rules! impl_from_env_text_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvText for $ty {
                fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
                    parse_required::<$ty>(text)
                }
            }
        )*
    };
}

impl_from_env_text_via_from_str!(
    i8, i16, i32, i64, isize,
    u8, u16, u32, u64, usize,
    f32, f64,
    OrderedFloat<f32>, OrderedFloat<f64>,
    Complex<f32>, Complex<f64>,
);

/// Complex numbers with totally ordered parts, usable as map keys.
macro_rules! impl_from_env_text_for_ordered_complex {
    ($($float:ty),* $(,)?) => {
        $(
            impl FromEnvText for Complex<OrderedFloat<$float>> {
                fn from_env_text(text: &str) -> Result<Option<Self>, EnvError> {
                    Ok(parse_required::<Complex<$float>>(text)?
                        .map(|c| Complex::new(OrderedFloat(c.re), OrderedFloat(c.im))))
                }
            }
        )*
    };
}

impl_from_env_text_for_ordered_complex!(f32, f64);

/// Parse via `FromStr`, treating empty text as absent.
fn parse_required<T>(text: &str) -> Result<Option<T>, EnvError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<T>()
        .map(Some)
        .map_err(|e| EnvError::parse_error::<T>(text, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert<T: FromEnvText>(text: &str) -> Option<T> {
        T::from_env_text(text).unwrap()
    }

    #[test]
    fn test_string_accepts_anything() {
        assert_eq!(convert::<String>("hello world"), Some("hello world".to_string()));
        assert_eq!(convert::<String>(""), Some(String::new()));
    }

    #[test]
    fn test_signed_integers() {
        assert_eq!(convert::<i8>("5"), Some(5));
        assert_eq!(convert::<i16>("12345"), Some(12345));
        assert_eq!(convert::<i32>("-3"), Some(-3));
        assert_eq!(convert::<i64>("8888888888"), Some(8_888_888_888));
        assert_eq!(convert::<isize>("3"), Some(3));
    }

    #[test]
    fn test_unsigned_integers() {
        assert_eq!(convert::<u8>("8"), Some(8));
        assert_eq!(convert::<u16>("12345"), Some(12345));
        assert_eq!(convert::<u32>("12345"), Some(12345));
        assert_eq!(convert::<u64>("8888888888"), Some(8_888_888_888));
        assert_eq!(convert::<usize>("123456789"), Some(123_456_789));
    }

    #[test]
    fn test_floats() {
        assert_eq!(convert::<f64>("9.87654321"), Some(9.87654321));
        assert_eq!(convert::<f32>("9.87654321"), Some(9.876_543_21_f32));
        assert_eq!(convert::<f64>("-3.6"), Some(-3.6));
    }

    #[test]
    fn test_complex() {
        assert_eq!(convert::<Complex<f32>>("3+6i"), Some(Complex::new(3.0, 6.0)));
        assert_eq!(convert::<Complex<f64>>("3+6i"), Some(Complex::new(3.0, 6.0)));
        assert_eq!(convert::<Complex<f64>>("200"), Some(Complex::new(200.0, 0.0)));
    }

    #[test]
    fn test_ordered_floats() {
        assert_eq!(convert::<OrderedFloat<f64>>("4.5"), Some(OrderedFloat(4.5)));
        assert_eq!(convert::<OrderedFloat<f32>>("-3"), Some(OrderedFloat(-3.0)));
        assert_eq!(
            convert::<Complex<OrderedFloat<f32>>>("-3+100i"),
            Some(Complex::new(OrderedFloat(-3.0), OrderedFloat(100.0)))
        );
        assert_eq!(convert::<OrderedFloat<f64>>(""), None);
        assert!(Complex::<OrderedFloat<f64>>::from_env_text("abc").is_err());
    }

    #[test]
    fn test_empty_key_is_absent_except_for_bool() {
        assert_eq!(String::from_env_key("").unwrap(), None);
        assert_eq!(String::from_env_key("a").unwrap(), Some("a".to_string()));
        assert_eq!(u8::from_env_key("").unwrap(), None);
        assert_eq!(bool::from_env_key("").unwrap(), Some(false));
    }

    #[test]
    fn test_empty_numeric_is_absent() {
        assert_eq!(convert::<i32>(""), None);
        assert_eq!(convert::<u64>(""), None);
        assert_eq!(convert::<f64>(""), None);
        assert_eq!(convert::<Complex<f64>>(""), None);
    }

    #[test]
    fn test_negative_unsigned_fails() {
        let err = u64::from_env_text("-1000").unwrap_err();
        match err {
            EnvError::Parse { kind, value, .. } => {
                assert_eq!(kind, "u64");
                assert_eq!(value, "-1000");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_overflow_fails() {
        assert!(u8::from_env_text("256").is_err());
        assert!(i8::from_env_text("-129").is_err());
        assert!(i32::from_env_text("not_a_number").is_err());
    }

    #[test]
    fn test_bool_tokens() {
        for text in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(convert::<bool>(text), Some(true), "{text}");
        }
        for text in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(convert::<bool>(text), Some(false), "{text}");
        }
    }

    #[test]
    fn test_bool_is_permissive() {
        assert_eq!(convert::<bool>("foo"), Some(true));
        assert_eq!(convert::<bool>("5"), Some(true));
        assert_eq!(convert::<bool>("-1"), Some(true));
        assert_eq!(convert::<bool>(""), Some(false));
    }
}
