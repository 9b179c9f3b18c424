//! Placeholder parsing for behavioural test steps.

use anyhow::{Context, Result};
use serde_json::Value;

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| trimmed.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(trimmed)
}

/// Parses a step placeholder holding inline JSON.
///
/// # Errors
///
/// Returns an error when the placeholder is not valid JSON.
pub fn json(value: &str) -> Result<Value> {
    serde_json::from_str(value.trim())
        .with_context(|| format!("step placeholder is not valid JSON: {value}"))
}
