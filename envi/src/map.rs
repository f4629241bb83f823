//! Maps discovered by variable-name prefix
//!
//! A map field bound to `MY_MAP` collects every variable named `MY_MAP_<suffix>`.
//! The suffix is converted into the key and the variable's value into the map
//! value, both with the text-level rules of their kinds. Entries where either
//! side is absent are skipped. An empty suffix (`MY_MAP_=...`) names no key and
//! is skipped too, except for `bool` keys where it reads as `false`.
//!
//! A field without a key uses the empty prefix and therefore sees every
//! variable. The struct-level `prefix` only applies to explicit names, so such
//! a field is not scoped to it either.
//!
//! Float keys go through [`OrderedFloat`](ordered_float::OrderedFloat), which
//! gives them the `Ord` and `Hash` a map key needs: `BTreeMap<OrderedFloat<f64>, _>`
//! and `HashMap<Complex<OrderedFloat<f32>>, _>` both work.
//!
//! A map that collected no entries is absent, so "not configured" and
//! "configured but empty" both leave the field at its default.

use crate::error::EnvError;
use crate::field::EnvField;
use crate::scalar::FromEnvText;
use crate::snapshot::{Snapshot, Source};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

/// Separator between the declared key and the map-key suffix
const SEPARATOR: char = '_';

fn effective_prefix(source: Source<'_>) -> String {
    match source.name() {
        Some(name) => format!("{name}{SEPARATOR}"),
        None => String::new(),
    }
}

fn collect_entries<M, K, V>(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<M>, EnvError>
where
    M: Default + Extend<(K, V)>,
    K: FromEnvText,
    V: FromEnvText,
{
    let prefix = effective_prefix(source);
    let mut out = M::default();
    let mut found = 0usize;

    for (key, value) in snapshot.with_prefix(&prefix) {
        let suffix = &key[prefix.len()..];

        let Some(k) = K::from_env_key(suffix).map_err(|e| EnvError::MapKey {
            key: key.to_owned(),
            kind: std::any::type_name::<K>(),
            source: Box::new(e),
        })?
        else {
            trace!(key = %key, "skipping map entry with absent key");
            continue;
        };

        let Some(v) = V::from_env_text(value).map_err(|e| EnvError::MapValue {
            key: key.to_owned(),
            kind: std::any::type_name::<V>(),
            source: Box::new(e),
        })?
        else {
            trace!(key = %key, "skipping map entry with absent value");
            continue;
        };

        out.extend(std::iter::once((k, v)));
        found += 1;
    }

    debug!(prefix = %prefix, found, "collected map entries");
    Ok((found > 0).then_some(out))
}

impl<K, V, S> EnvField for HashMap<K, V, S>
where
    K: FromEnvText + Eq + Hash,
    V: FromEnvText,
    S: BuildHasher + Default,
{
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError> {
        collect_entries(snapshot, source)
    }
}

impl<K, V> EnvField for BTreeMap<K, V>
where
    K: FromEnvText + Ord,
    V: FromEnvText,
{
    fn from_env_field(snapshot: &Snapshot, source: Source<'_>) -> Result<Option<Self>, EnvError> {
        collect_entries(snapshot, source)
    }
}
