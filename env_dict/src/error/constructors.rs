//! Constructors attaching variable context to `EnvDictError`.

use std::num::{ParseFloatError, ParseIntError};

use crate::names::SelectedVar;
use crate::route::RouteError;

use super::{EnvDictError, ListAppendError};

impl EnvDictError {
    /// Wraps a list-append failure with the variable that triggered it.
    ///
    /// # Examples
    ///
    /// ```
    /// use env_dict::{EnvDictError, ListAppendError};
    ///
    /// let err = EnvDictError::list_append("V_x_LIST_APPEND", "1", ListAppendError::NoTarget);
    /// assert_eq!(err.to_string(), "V_x_LIST_APPEND=1\nno initial list to append to");
    /// ```
    #[must_use]
    pub fn list_append(
        key: impl Into<String>,
        value: impl Into<String>,
        kind: ListAppendError,
    ) -> Self {
        Self::ListAppend {
            key: key.into(),
            value: value.into(),
            kind,
        }
    }

    /// Returns the list-append cause when this is a list-append failure.
    #[must_use]
    pub const fn list_append_kind(&self) -> Option<&ListAppendError> {
        match self {
            Self::ListAppend { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub(crate) fn from_route(var: &SelectedVar, err: RouteError) -> Self {
        match err {
            RouteError::Append(kind) => Self::list_append(&var.key, &var.value, kind),
            RouteError::Conflict { segment, found } => Self::RouteConflict {
                key: var.key.clone(),
                value: var.value.clone(),
                segment,
                found,
            },
        }
    }

    pub(crate) fn invalid_integer(var: &SelectedVar, source: ParseIntError) -> Self {
        Self::InvalidInteger {
            key: var.key.clone(),
            value: var.value.clone(),
            source,
        }
    }

    pub(crate) fn integer_out_of_range(var: &SelectedVar) -> Self {
        Self::IntegerOutOfRange {
            key: var.key.clone(),
            value: var.value.clone(),
        }
    }

    pub(crate) fn invalid_float(var: &SelectedVar, source: ParseFloatError) -> Self {
        Self::InvalidFloat {
            key: var.key.clone(),
            value: var.value.clone(),
            source,
        }
    }

    pub(crate) fn non_finite_float(var: &SelectedVar) -> Self {
        Self::NonFiniteFloat {
            key: var.key.clone(),
            value: var.value.clone(),
        }
    }

    pub(crate) fn invalid_bool(var: &SelectedVar, literal: &str) -> Self {
        Self::InvalidBool {
            key: var.key.clone(),
            value: var.value.clone(),
            literal: literal.to_owned(),
        }
    }

    pub(crate) fn invalid_json(var: &SelectedVar, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            key: var.key.clone(),
            value: var.value.clone(),
            source,
        }
    }

    pub(crate) fn already_decoded(var: &SelectedVar, suffix: &str, found: &'static str) -> Self {
        Self::AlreadyDecoded {
            key: var.key.clone(),
            value: var.value.clone(),
            suffix: suffix.to_owned(),
            found,
        }
    }

    pub(crate) fn empty_list_separator(var: &SelectedVar) -> Self {
        Self::EmptyListSeparator {
            key: var.key.clone(),
        }
    }
}

impl From<figment::Error> for EnvDictError {
    fn from(err: figment::Error) -> Self {
        Self::Options(Box::new(err))
    }
}

impl From<EnvDictError> for figment::Error {
    fn from(err: EnvDictError) -> Self {
        Self::from(err.to_string())
    }
}
