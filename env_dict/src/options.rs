//! Parse options and their defaults.

use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::{EnvDictResult, NameReplaces};

/// Default list separator.
pub const DEFAULT_LIST_SEPARATOR: &str = ";";
/// Default separator between nested key segments.
pub const DEFAULT_DICT_LEVEL_SEPARATOR: &str = "__";

/// Suffix tokens that select a value conversion.
///
/// An empty token disables its conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suffixes {
    /// Base-10 integer conversion, `_NUMBER` by default.
    pub integer: String,
    /// Floating point conversion, `_FLOAT` by default.
    pub float: String,
    /// Boolean conversion, `_FLAG` by default.
    pub boolean: String,
    /// List-of-strings conversion, `_LIST` by default.
    pub list: String,
    /// Append to an existing list, `_LIST_APPEND` by default.
    pub list_append: String,
    /// JSON decoding, `_JSON` by default.
    pub json: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            integer: "_NUMBER".to_owned(),
            float: "_FLOAT".to_owned(),
            boolean: "_FLAG".to_owned(),
            list: "_LIST".to_owned(),
            list_append: "_LIST_APPEND".to_owned(),
            json: "_JSON".to_owned(),
        }
    }
}

/// Options controlling how variables are selected and decoded.
///
/// Every option other than the prefix has a default, both when built with
/// [`ParseOptions::new`] and when deserialised.
///
/// # Examples
///
/// ```
/// use env_dict::{NameReplaces, ParseOptions};
///
/// let options = ParseOptions::new("APP_")
///     .with_list_separator(",")
///     .with_names_replaces(NameReplaces::none());
/// assert_eq!(options.prefix(), "APP_");
/// assert_eq!(options.dict_level_separator(), "__");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    prefix: String,
    #[serde(default)]
    suffixes: Suffixes,
    #[serde(default = "default_list_separator")]
    list_separator: String,
    #[serde(default = "default_dict_level_separator")]
    dict_level_separator: String,
    #[serde(default)]
    names_replaces: NameReplaces,
}

fn default_list_separator() -> String {
    DEFAULT_LIST_SEPARATOR.to_owned()
}

fn default_dict_level_separator() -> String {
    DEFAULT_DICT_LEVEL_SEPARATOR.to_owned()
}

impl ParseOptions {
    /// Creates options selecting variables that start with `prefix`.
    ///
    /// An empty prefix selects every variable.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffixes: Suffixes::default(),
            list_separator: default_list_separator(),
            dict_level_separator: default_dict_level_separator(),
            names_replaces: NameReplaces::default(),
        }
    }

    /// Extracts options from a configuration layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_dict::ParseOptions;
    /// use figment::{Figment, providers::Serialized};
    ///
    /// let figment = Figment::from(Serialized::defaults(serde_json::json!({
    ///     "prefix": "APP_",
    ///     "list_separator": ",",
    ///     "suffixes": { "integer": "_INT" },
    /// })));
    /// let options = ParseOptions::from_figment(&figment)?;
    /// assert_eq!(options.suffixes().integer, "_INT");
    /// assert_eq!(options.suffixes().json, "_JSON");
    /// # Ok::<_, env_dict::EnvDictError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvDictError::Options`] when the layer lacks a prefix
    /// or holds values of the wrong shape.
    pub fn from_figment(figment: &Figment) -> EnvDictResult<Self> {
        Ok(figment.extract()?)
    }

    /// Replaces the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the suffix table.
    #[must_use]
    pub fn with_suffixes(mut self, suffixes: Suffixes) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Replaces the list separator.
    #[must_use]
    pub fn with_list_separator(mut self, separator: impl Into<String>) -> Self {
        self.list_separator = separator.into();
        self
    }

    /// Replaces the nesting separator; an empty separator disables nesting.
    #[must_use]
    pub fn with_dict_level_separator(mut self, separator: impl Into<String>) -> Self {
        self.dict_level_separator = separator.into();
        self
    }

    /// Replaces the key translation table.
    #[must_use]
    pub fn with_names_replaces(mut self, replaces: NameReplaces) -> Self {
        self.names_replaces = replaces;
        self
    }

    /// Prefix selecting variables.
    #[must_use]
    pub const fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    /// Suffix tokens.
    #[must_use]
    pub const fn suffixes(&self) -> &Suffixes {
        &self.suffixes
    }

    /// Separator splitting list values.
    #[must_use]
    pub const fn list_separator(&self) -> &str {
        self.list_separator.as_str()
    }

    /// Separator splitting keys into nested routes.
    #[must_use]
    pub const fn dict_level_separator(&self) -> &str {
        self.dict_level_separator.as_str()
    }

    /// Key translation table.
    #[must_use]
    pub const fn names_replaces(&self) -> &NameReplaces {
        &self.names_replaces
    }
}
