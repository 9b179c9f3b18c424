//! Prefix selection and key translation.
//!
//! Variables are selected by prefix, the prefix is stripped, and the
//! remaining key is rewritten through a [`NameReplaces`] table before any
//! suffix is inspected. The default table turns `0dash0` into `-`, which
//! lets environment variables address keys such as `osd-1` that their own
//! naming rules cannot express.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered substitution table applied to keys after prefix removal.
///
/// Pairs are applied in order, each replacing every occurrence of its token.
/// Deserialises from a sequence of `[token, replacement]` pairs; an empty
/// sequence disables translation.
///
/// # Examples
///
/// ```
/// use env_dict::NameReplaces;
///
/// let replaces = NameReplaces::new([("1", "a"), ("234", "b")]);
/// assert_eq!(replaces.translate("12345678"), "ab5678");
/// assert_eq!(NameReplaces::default().translate("osd0dash01"), "osd-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameReplaces(Vec<(String, String)>);

impl NameReplaces {
    /// Token substituted by the default table.
    pub const DASH_TOKEN: &'static str = "0dash0";

    /// Builds a table from `(token, replacement)` pairs, preserving order.
    #[must_use]
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(token, replacement)| (token.into(), replacement.into()))
                .collect(),
        )
    }

    /// An empty table that leaves keys untouched.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Whether the table performs no substitutions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the `(token, replacement)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(token, replacement)| (token.as_str(), replacement.as_str()))
    }

    /// Applies every substitution to `key` in table order.
    ///
    /// Empty tokens are ignored.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.iter()
            .filter(|(token, _)| !token.is_empty())
            .fold(key.to_owned(), |acc, (token, replacement)| {
                acc.replace(token, replacement)
            })
    }
}

impl Default for NameReplaces {
    fn default() -> Self {
        Self::new([(Self::DASH_TOKEN, "-")])
    }
}

/// A variable chosen for decoding, remembered as it appeared in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SelectedVar {
    /// Original key, prefix included.
    pub(crate) key: String,
    /// Raw value.
    pub(crate) value: String,
}

/// Selects variables starting with `prefix` and keys them by their
/// translated, unprefixed name.
///
/// The result iterates in ascending key order. When translation folds two
/// source keys onto one name, the source key sorting last wins.
pub(crate) fn select<I>(
    vars: I,
    prefix: &str,
    replaces: &NameReplaces,
) -> BTreeMap<String, SelectedVar>
where
    I: IntoIterator<Item = (String, String)>,
{
    let ordered: BTreeMap<String, String> = vars.into_iter().collect();
    ordered
        .into_iter()
        .filter_map(|(key, value)| {
            let translated = replaces.translate(key.strip_prefix(prefix)?);
            Some((translated, SelectedVar { key, value }))
        })
        .collect()
}
