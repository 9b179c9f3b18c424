//! Decode flat string variables into a typed, nested tree.
//!
//! Variables are selected by prefix, their keys are translated, and a
//! trailing suffix picks how each value is converted: `_NUMBER`, `_FLOAT`,
//! `_FLAG`, `_LIST` and `_JSON` by default. Keys are then split on `__` into
//! a route through nested mappings, and `_LIST_APPEND` extends a list that an
//! earlier variable or the initial tree already holds.
//!
//! ```
//! use env_dict::{ParseOptions, parse_vars};
//! use serde_json::json;
//!
//! let source = [
//!     ("APP_server__port_NUMBER", "8080"),
//!     ("APP_server__debug_FLAG", "yes"),
//!     ("APP_peers_LIST", "a;b"),
//! ];
//! let tree = parse_vars(&source, None, &ParseOptions::new("APP_"))?;
//! assert_eq!(
//!     serde_json::Value::Object(tree),
//!     json!({"server": {"port": 8080, "debug": true}, "peers": ["a", "b"]})
//! );
//! # Ok::<_, env_dict::EnvDictError>(())
//! ```
//!
//! [`SuffixEnv`] exposes the same decoding as a [`figment::Provider`].

mod decode;
mod error;
mod names;
mod options;
mod parse;
mod provider;
mod route;
mod source;

pub use error::{EnvDictError, EnvDictResult, ListAppendError};
pub use names::NameReplaces;
pub use options::{DEFAULT_DICT_LEVEL_SEPARATOR, DEFAULT_LIST_SEPARATOR, ParseOptions, Suffixes};
pub use parse::{parse_env, parse_vars};
pub use provider::SuffixEnv;
pub use source::{ProcessEnv, VarSource};

/// Nested mapping produced by decoding.
///
/// Values are scalars, lists or further mappings.
pub type Tree = serde_json::Map<String, serde_json::Value>;
