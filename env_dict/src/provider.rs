//! Figment provider backed by suffix-typed variables.
//!
//! [`SuffixEnv`] runs [`parse_vars`] and hands the decoded tree to Figment as
//! a configuration layer, so typed values such as `APP_PORT_NUMBER=8080` or
//! `APP_HOSTS_LIST=a;b` deserialise straight into configuration structs.

use std::collections::BTreeMap;

use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};

use crate::{EnvDictResult, ParseOptions, Tree, VarSource, parse_env, parse_vars};

/// Environment provider decoding suffix-typed variables.
///
/// # Examples
///
/// ```
/// use env_dict::{ParseOptions, SuffixEnv};
/// use figment::Figment;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Settings {
///     port: u16,
///     hosts: Vec<String>,
/// }
///
/// let source = [("APP_port_NUMBER", "8080"), ("APP_hosts_LIST", "a;b")];
/// let provider = SuffixEnv::from_source(&source, ParseOptions::new("APP_"));
/// let settings: Settings = Figment::from(provider).extract()?;
/// assert_eq!(settings.port, 8080);
/// assert_eq!(settings.hosts, ["a", "b"]);
/// # Ok::<_, figment::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct SuffixEnv {
    options: ParseOptions,
    /// Fixed variables; `None` reads the process environment on every load.
    source: Option<BTreeMap<String, String>>,
    initial: Option<Tree>,
    profile: Profile,
}

impl SuffixEnv {
    /// Create a provider reading the process environment.
    #[must_use]
    pub const fn new(options: ParseOptions) -> Self {
        Self {
            options,
            source: None,
            initial: None,
            profile: Profile::Default,
        }
    }

    /// Create a provider over a snapshot of `source`.
    #[must_use]
    pub fn from_source<S>(source: &S, options: ParseOptions) -> Self
    where
        S: VarSource + ?Sized,
    {
        Self {
            source: Some(source.vars().into_iter().collect()),
            ..Self::new(options)
        }
    }

    /// Seed the decoded tree with `initial`.
    #[must_use]
    pub fn with_initial(mut self, initial: Tree) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Emit the decoded tree under `profile` instead of the default profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<Profile>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Options used to decode variables.
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Decode the variables into a tree without going through Figment.
    ///
    /// # Errors
    ///
    /// Returns the first decoding failure; see [`parse_vars`].
    pub fn tree(&self) -> EnvDictResult<Tree> {
        let initial = self.initial.as_ref();
        match &self.source {
            Some(source) => parse_vars(source, initial, &self.options),
            None => parse_env(initial, &self.options),
        }
    }
}

impl Provider for SuffixEnv {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!(
            "suffix-typed environment variable(s) prefixed `{}`",
            self.options.prefix()
        ))
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let tree = self.tree()?;
        let Some(dict) = Value::serialize(serde_json::Value::Object(tree))?.into_dict() else {
            return Err(Error::from(
                "decoded environment did not produce a dictionary".to_owned(),
            ));
        };
        Ok(self.profile.collect(dict))
    }
}
