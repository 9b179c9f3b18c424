//! Error types produced while decoding variables.

mod constructors;
mod helpers;
mod types;

pub use types::{EnvDictError, ListAppendError};

pub(crate) use helpers::value_kind;

/// Result alias used throughout the crate.
pub type EnvDictResult<T> = Result<T, EnvDictError>;
