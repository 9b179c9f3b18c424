//! Nested key routing.
//!
//! A decoded key is split on the level separator into a `Route`, which is
//! then walked through the result tree, creating intermediate mappings for
//! plain writes. List-append writes never create structure: every segment up
//! to the target list must already exist.

use serde_json::Value;

use crate::error::value_kind;
use crate::{ListAppendError, Tree};

/// Path of a value inside the tree.
///
/// A route always holds at least one segment and never an empty one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Route<'k> {
    parents: Vec<&'k str>,
    leaf: &'k str,
}

impl<'k> Route<'k> {
    /// Splits `key` on `separator`, or keeps it whole when the separator is
    /// empty.
    ///
    /// Returns `None` when any segment would be empty, as with leading,
    /// trailing or doubled separators.
    pub(crate) fn parse(key: &'k str, separator: &str) -> Option<Self> {
        let mut parents: Vec<&'k str> = if separator.is_empty() {
            vec![key]
        } else {
            key.split(separator).collect()
        };
        if parents.iter().any(|segment| segment.is_empty()) {
            return None;
        }
        let leaf = parents.pop()?;
        Some(Self { parents, leaf })
    }

    /// Number of segments, leaf included.
    pub(crate) const fn depth(&self) -> usize {
        self.parents.len() + 1
    }
}

/// Reasons a write into the tree fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RouteError {
    Append(ListAppendError),
    /// A plain write met a non-mapping value on its way down.
    Conflict {
        segment: String,
        found: &'static str,
    },
}

impl From<ListAppendError> for RouteError {
    fn from(kind: ListAppendError) -> Self {
        Self::Append(kind)
    }
}

/// Writes `value` at `route`, or extends the list there when `append` is set.
pub(crate) fn put_nested(
    tree: &mut Tree,
    route: &Route<'_>,
    value: Value,
    append: bool,
) -> Result<(), RouteError> {
    let mut level = tree;
    for segment in &route.parents {
        level = descend(level, segment, append)?;
    }
    if append {
        append_list(level, route.leaf, value)?;
    } else {
        level.insert(route.leaf.to_owned(), value);
    }
    Ok(())
}

fn descend<'t>(
    level: &'t mut Tree,
    segment: &str,
    append: bool,
) -> Result<&'t mut Tree, RouteError> {
    if append {
        return match level.get_mut(segment) {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(ListAppendError::BreakingRoute {
                segment: segment.to_owned(),
            }
            .into()),
        };
    }
    match level
        .entry(segment)
        .or_insert_with(|| Value::Object(Tree::new()))
    {
        Value::Object(map) => Ok(map),
        other => Err(RouteError::Conflict {
            segment: segment.to_owned(),
            found: value_kind(other),
        }),
    }
}

/// Extends the list at `key` with the elements of `value`.
///
/// Both the target and the value are checked before the target is touched.
fn append_list(level: &mut Tree, key: &str, value: Value) -> Result<(), ListAppendError> {
    let target = level.get_mut(key).ok_or(ListAppendError::NoTarget)?;
    let items = match target {
        Value::Array(items) => items,
        other => {
            return Err(ListAppendError::TargetNotList {
                found: value_kind(other),
            });
        }
    };
    match value {
        Value::Array(extra) => {
            items.extend(extra);
            Ok(())
        }
        other => Err(ListAppendError::InputNotList {
            found: value_kind(&other),
        }),
    }
}
