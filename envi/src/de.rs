//! Lookup helpers shared by the converters and by macro-generated code

use crate::error::EnvError;
use crate::field::EnvField;
use crate::scalar::FromEnvText;
use crate::snapshot::{Snapshot, Source};
use std::borrow::Cow;
use std::fs;
use tracing::{debug, trace};

/// Decode one struct field, tagging failures with the field name.
///
/// Used by macro-generated code.
#[doc(hidden)]
pub fn field<T: EnvField>(
    snapshot: &Snapshot,
    source: Source<'_>,
    field: &'static str,
) -> Result<Option<T>, EnvError> {
    let value = T::from_env_field(snapshot, source).map_err(|e| EnvError::field(field, e))?;
    if value.is_none() {
        trace!(field, key = ?source.name(), "field not populated");
    }
    Ok(value)
}

/// Decode a text-level field from the variable its source names.
#[doc(hidden)]
pub fn text_field<T: FromEnvText>(
    snapshot: &Snapshot,
    source: Source<'_>,
) -> Result<Option<T>, EnvError> {
    let Some(name) = source.name() else {
        return Ok(None);
    };
    match get_env_value(snapshot, source)? {
        Some(text) => T::from_env_text(&text).map_err(|e| EnvError::variable(name, e)),
        None => Ok(None),
    }
}

/// Like [`text_field`], but an empty variable is absent for every kind.
#[doc(hidden)]
pub fn optional_text_field<T: FromEnvText>(
    snapshot: &Snapshot,
    source: Source<'_>,
) -> Result<Option<T>, EnvError> {
    Ok(text_field::<Option<T>>(snapshot, source)?.flatten())
}

/// Get the text of a field with optional file-based fallback
///
/// Priority order:
/// 1. Direct environment variable (`KEY`)
/// 2. File from environment variable (`KEY_FILE`) if the source reads files
/// 3. `None` if neither is set, or if the source has no key
#[doc(hidden)]
pub fn get_env_value<'s>(
    snapshot: &'s Snapshot,
    source: Source<'_>,
) -> Result<Option<Cow<'s, str>>, EnvError> {
    let Some(name) = source.name() else {
        return Ok(None);
    };

    if let Some(value) = snapshot.get(name) {
        return Ok(Some(Cow::Borrowed(value)));
    }

    if source.reads_file() {
        let file_var_name = format!("{name}_FILE");
        if let Some(file_path) = snapshot.get(&file_var_name) {
            debug!(variable = %file_var_name, path = file_path, "reading value from file");
            return fs::read_to_string(file_path)
                .map(|s| Some(Cow::Owned(s.trim().to_string())))
                .map_err(|e| EnvError::FileRead {
                    name: file_var_name,
                    path: file_path.to_string(),
                    source: e,
                });
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_env_value_direct() {
        let snapshot: Snapshot = [("TEST_VAR", "42")].into_iter().collect();
        let value = get_env_value(&snapshot, Source::key("TEST_VAR")).unwrap();
        assert_eq!(value.as_deref(), Some("42"));
    }

    #[test]
    fn test_get_env_value_missing() {
        let snapshot = Snapshot::default();
        let value = get_env_value(&snapshot, Source::new(Some("MISSING_VAR"), true)).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_env_value_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "secret_value").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let snapshot: Snapshot = [("TEST_FILE_VAR_FILE", path)].into_iter().collect();

        let value = get_env_value(&snapshot, Source::new(Some("TEST_FILE_VAR"), true)).unwrap();
        assert_eq!(value.as_deref(), Some("secret_value"));
    }

    #[test]
    fn test_get_env_value_ignores_file_without_flag() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "secret_value").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let snapshot: Snapshot = [("TEST_FILE_VAR_FILE", path)].into_iter().collect();

        let value = get_env_value(&snapshot, Source::key("TEST_FILE_VAR")).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_env_value_prefers_direct() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "file_value").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let snapshot: Snapshot = [("TEST_PREFER", "direct_value"), ("TEST_PREFER_FILE", path)]
            .into_iter()
            .collect();

        let value = get_env_value(&snapshot, Source::new(Some("TEST_PREFER"), true)).unwrap();
        assert_eq!(value.as_deref(), Some("direct_value"));
    }

    #[test]
    fn test_get_env_value_file_not_found() {
        let snapshot: Snapshot = [("TEST_FILE_MISSING_FILE", "/nonexistent/file/path")]
            .into_iter()
            .collect();

        let result = get_env_value(&snapshot, Source::new(Some("TEST_FILE_MISSING"), true));
        assert!(matches!(result, Err(EnvError::FileRead { .. })));
    }

    #[test]
    fn test_text_field_parses_file_content() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "  5432  ").unwrap();

        let path = temp_file.path().to_str().unwrap();
        let snapshot: Snapshot = [("DB_PORT_FILE", path)].into_iter().collect();

        let port: Option<u16> = text_field(&snapshot, Source::new(Some("DB_PORT"), true)).unwrap();
        assert_eq!(port, Some(5432));
    }

    #[test]
    fn test_field_wraps_errors_with_field_name() {
        let snapshot: Snapshot = [("MY_UINT", "-1000")].into_iter().collect();
        let err = field::<usize>(&snapshot, Source::key("MY_UINT"), "uint").unwrap_err();
        assert_eq!(err.field_path(), ["uint"]);
        assert!(matches!(err.root_cause(), EnvError::Parse { kind: "usize", .. }));
    }
}
