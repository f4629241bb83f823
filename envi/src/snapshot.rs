//! Immutable view of the environment for one decode call

use std::collections::BTreeMap;
use std::ops::Bound;
use tracing::{debug, trace};

/// A read-only set of environment variable `(key, value)` pairs.
///
/// Every converter receives the snapshot explicitly, so one decode call sees a
/// single consistent environment and tests never have to touch the process
/// environment.
///
/// ```
/// use envi::Snapshot;
///
/// let snapshot: Snapshot = [("PORT", "8080"), ("HOST", "localhost")].into_iter().collect();
/// assert_eq!(snapshot.get("PORT"), Some("8080"));
/// assert_eq!(snapshot.get("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
}

impl Snapshot {
    /// Read the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn capture() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    trace!(key = ?key, "skipping environment variable that is not valid UTF-8");
                    None
                }
            })
            .collect();

        debug!(count = vars.len(), "captured environment snapshot");
        Self { vars }
    }

    /// Value of the variable named exactly `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// All entries, ordered by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose key starts with `prefix`, ordered by key.
    ///
    /// An empty prefix yields every entry.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.vars
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Where a struct field takes its value from.
///
/// Built by the derive macro from the `#[env(...)]` annotations of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Source<'a> {
    key: Option<&'a str>,
    from_file: bool,
}

impl<'a> Source<'a> {
    /// A source with an optional key and `{KEY}_FILE` support
    pub const fn new(key: Option<&'a str>, from_file: bool) -> Self {
        Self { key, from_file }
    }

    /// A source bound to the variable `key`
    pub const fn key(key: &'a str) -> Self {
        Self::new(Some(key), false)
    }

    /// A source without a key.
    ///
    /// Scalar and sequence fields bound to it are never populated. Maps bound
    /// to it match every variable.
    pub const fn inert() -> Self {
        Self::new(None, false)
    }

    /// The variable name, if any
    pub const fn name(&self) -> Option<&'a str> {
        self.key
    }

    /// Whether `{KEY}_FILE` is consulted when `KEY` is unset
    pub const fn reads_file(&self) -> bool {
        self.from_file
    }
}
