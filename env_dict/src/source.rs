//! Sources of raw string variables.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A flat mapping of string keys to string values.
///
/// Implemented for the process environment and for common map and pair
/// collections, so tests and embedders can supply variables directly.
pub trait VarSource {
    /// Returns every variable as an owned key/value pair.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The environment of the current process.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key_text), Ok(value_text)) => Some((key_text, value_text)),
                (key_result, _) => {
                    tracing::debug!(
                        key = ?key_result,
                        "skipping environment variable that is not valid UTF-8"
                    );
                    None
                }
            })
            .collect()
    }
}

fn owned_pairs<'a, K, V, I>(pairs: I) -> Vec<(String, String)>
where
    K: AsRef<str> + 'a,
    V: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_owned(), value.as_ref().to_owned()))
        .collect()
}

impl<K, V, S> VarSource for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn vars(&self) -> Vec<(String, String)> {
        owned_pairs(self)
    }
}

impl<K, V> VarSource for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn vars(&self) -> Vec<(String, String)> {
        owned_pairs(self)
    }
}

impl<K, V> VarSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn vars(&self) -> Vec<(String, String)> {
        owned_pairs(self.iter().map(|(key, value)| (key, value)))
    }
}

impl<K, V, const N: usize> VarSource for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn vars(&self) -> Vec<(String, String)> {
        self.as_slice().vars()
    }
}

impl<K, V> VarSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn vars(&self) -> Vec<(String, String)> {
        self.as_slice().vars()
    }
}
