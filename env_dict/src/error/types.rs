//! Primary error enums for variable decoding flows.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors that can occur while decoding variables into a tree.
///
/// Every variant that stems from a single variable carries the original,
/// fully prefixed key and the raw value so misconfigured suffixes can be
/// traced back to the offending entry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvDictError {
    /// Appending to a list inside the tree failed.
    #[error("{key}={value}\n{kind}")]
    ListAppend {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Structural reason the append was rejected, rendered after the
        /// variable rather than exposed as a source.
        kind: ListAppendError,
    },

    /// The value of an integer-suffixed variable is not a base-10 integer.
    #[error("invalid integer value for {key}={value}: {source}")]
    InvalidInteger {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseIntError,
    },

    /// A number decoded by an earlier suffix truncates to an integer wider
    /// than 64 bits.
    #[error("integer value out of range for {key}={value}")]
    IntegerOutOfRange {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
    },

    /// The value of a float-suffixed variable is not a floating point literal.
    #[error("invalid float value for {key}={value}: {source}")]
    InvalidFloat {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseFloatError,
    },

    /// A float literal parsed to infinity or NaN, which the tree cannot hold.
    #[error("float value for {key}={value} is not finite")]
    NonFiniteFloat {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
    },

    /// The value of a flag-suffixed variable is not a recognised literal.
    #[error("unknown bool-convertible value `{literal}` for variable {key}={value}")]
    InvalidBool {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Literal that failed to match.
        literal: String,
    },

    /// The value of a JSON-suffixed variable is not valid JSON.
    #[error("invalid JSON value for {key}={value}: {source}")]
    InvalidJson {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// A stacked suffix expects text but an earlier suffix already decoded it.
    #[error("cannot apply suffix `{suffix}` to {found} decoded earlier for {key}={value}")]
    AlreadyDecoded {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Suffix token that could not be applied.
        suffix: String,
        /// Type of the already decoded value.
        found: &'static str,
    },

    /// A list suffix was used while the list separator is empty.
    #[error("list separator must not be empty to decode {key}")]
    EmptyListSeparator {
        /// Original variable name, including the prefix.
        key: String,
    },

    /// A nested write would have to descend through a non-mapping value.
    #[error(
        "{key}={value}\ncannot nest under `{segment}`: existing value is {found}, not a mapping"
    )]
    RouteConflict {
        /// Original variable name, including the prefix.
        key: String,
        /// Raw variable value.
        value: String,
        /// Route segment holding the conflicting value.
        segment: String,
        /// Type of the conflicting value.
        found: &'static str,
    },

    /// Parse options could not be extracted from a configuration layer.
    #[error("failed to load parse options: {0}")]
    Options(#[from] Box<figment::Error>),
}

/// Reasons a list-append write is rejected by the nested router.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListAppendError {
    /// An intermediate mapping on the route does not exist.
    #[error("target dict route breaks at `{segment}`, no list to append to")]
    BreakingRoute {
        /// First missing route segment.
        segment: String,
    },

    /// The terminal key does not exist.
    #[error("no initial list to append to")]
    NoTarget,

    /// The terminal key holds something other than a list.
    #[error("initial value to append to is {found}, not a list")]
    TargetNotList {
        /// Type of the existing value.
        found: &'static str,
    },

    /// The decoded value is not a list.
    #[error("value to append is {found}, not a list")]
    InputNotList {
        /// Type of the decoded value.
        found: &'static str,
    },
}
