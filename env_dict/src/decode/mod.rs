//! Suffix-driven value conversion.
//!
//! A key's trailing suffix selects a conversion for its value. Suffixes are
//! checked in a fixed priority order; after each match the suffix is stripped
//! and the check starts over, so suffixes can be stacked. The list-append
//! suffix is handled once the conversion loop has finished.

use std::borrow::Cow;
use std::num::ParseIntError;

use serde_json::{Number, Value};

use crate::error::value_kind;
use crate::names::SelectedVar;
use crate::{EnvDictError, EnvDictResult, ParseOptions};

/// Conversions in the order their suffixes are checked.
const PRIORITY: [Conversion; 5] = [
    Conversion::Integer,
    Conversion::Float,
    Conversion::List,
    Conversion::Boolean,
    Conversion::Json,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conversion {
    Integer,
    Float,
    List,
    Boolean,
    Json,
}

/// Result of decoding one variable.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Decoded<'k> {
    /// Key with every recognised suffix removed.
    pub(crate) key: &'k str,
    pub(crate) value: Value,
    /// Whether the value must be appended to an existing list.
    pub(crate) append: bool,
}

/// Applies the configured suffix table to variables.
#[derive(Debug)]
pub(crate) struct Decoder<'o> {
    table: [(Conversion, &'o str); 5],
    list_append: &'o str,
    list_separator: &'o str,
}

impl<'o> Decoder<'o> {
    pub(crate) fn new(options: &'o ParseOptions) -> Self {
        let suffixes = options.suffixes();
        let table = PRIORITY.map(|conversion| {
            let token = match conversion {
                Conversion::Integer => suffixes.integer.as_str(),
                Conversion::Float => suffixes.float.as_str(),
                Conversion::List => suffixes.list.as_str(),
                Conversion::Boolean => suffixes.boolean.as_str(),
                Conversion::Json => suffixes.json.as_str(),
            };
            (conversion, token)
        });
        Self {
            table,
            list_append: suffixes.list_append.as_str(),
            list_separator: options.list_separator(),
        }
    }

    /// Decodes `var`, addressed by its translated key `key`.
    pub(crate) fn decode<'k>(&self, key: &'k str, var: &SelectedVar) -> EnvDictResult<Decoded<'k>> {
        let mut remaining = key;
        let mut value = Value::String(var.value.clone());
        // Each pass strips a non-empty suffix, so the loop is bounded by the key length.
        while let Some((conversion, token, stripped)) = self.match_suffix(remaining) {
            value = self.convert(conversion, token, value, var)?;
            remaining = stripped;
        }

        let Some(target) = strip_token(remaining, self.list_append) else {
            return Ok(Decoded {
                key: remaining,
                value,
                append: false,
            });
        };
        let list = match value {
            Value::String(text) => self.split(&text, var)?,
            decoded => {
                self.require_separator(var)?;
                decoded
            }
        };
        Ok(Decoded {
            key: target,
            value: list,
            append: true,
        })
    }

    fn match_suffix<'k>(&self, key: &'k str) -> Option<(Conversion, &'o str, &'k str)> {
        self.table.iter().find_map(|&(conversion, token)| {
            strip_token(key, token).map(|stripped| (conversion, token, stripped))
        })
    }

    /// Converts the current value of `var`.
    ///
    /// Text is parsed according to the conversion. Numbers decoded by an
    /// earlier suffix are also accepted by the numeric conversions; any other
    /// already decoded value is rejected.
    fn convert(
        &self,
        conversion: Conversion,
        token: &str,
        value: Value,
        var: &SelectedVar,
    ) -> EnvDictResult<Value> {
        match (conversion, value) {
            (_, Value::String(text)) => self.convert_text(conversion, &text, var),
            (Conversion::Integer, Value::Number(number)) => truncate_number(&number, var),
            (Conversion::Float, Value::Number(number)) => widen_number(&number, var),
            (_, decoded) => Err(EnvDictError::already_decoded(
                var,
                token,
                value_kind(&decoded),
            )),
        }
    }

    fn convert_text(
        &self,
        conversion: Conversion,
        text: &str,
        var: &SelectedVar,
    ) -> EnvDictResult<Value> {
        match conversion {
            Conversion::Integer => parse_integer(text, var),
            Conversion::Float => parse_float(text, var),
            Conversion::List => self.split(text, var),
            Conversion::Boolean => {
                parse_flag(text).ok_or_else(|| EnvDictError::invalid_bool(var, text))
            }
            Conversion::Json => {
                serde_json::from_str(text).map_err(|err| EnvDictError::invalid_json(var, err))
            }
        }
    }

    fn split(&self, text: &str, var: &SelectedVar) -> EnvDictResult<Value> {
        self.require_separator(var)?;
        Ok(Value::Array(
            text.split(self.list_separator)
                .map(|item| Value::String(item.to_owned()))
                .collect(),
        ))
    }

    fn require_separator(&self, var: &SelectedVar) -> EnvDictResult<()> {
        if self.list_separator.is_empty() {
            return Err(EnvDictError::empty_list_separator(var));
        }
        Ok(())
    }
}

/// Strips a non-empty `token` from the end of `key`.
fn strip_token<'k>(key: &'k str, token: &str) -> Option<&'k str> {
    if token.is_empty() {
        return None;
    }
    key.strip_suffix(token)
}

fn parse_integer(text: &str, var: &SelectedVar) -> EnvDictResult<Value> {
    let digits = without_digit_separators(text.trim());
    integer_value(&digits).map_err(|err| EnvDictError::invalid_integer(var, err))
}

/// Parses a signed 64-bit integer, falling back to unsigned for larger values.
fn integer_value(text: &str) -> Result<Value, ParseIntError> {
    match text.parse::<i64>() {
        Ok(number) => Ok(Value::from(number)),
        Err(err) => text.parse::<u64>().map(Value::from).map_err(|_| err),
    }
}

fn parse_float(text: &str, var: &SelectedVar) -> EnvDictResult<Value> {
    let number = without_digit_separators(text.trim())
        .parse::<f64>()
        .map_err(|err| EnvDictError::invalid_float(var, err))?;
    Number::from_f64(number)
        .map(Value::Number)
        .ok_or_else(|| EnvDictError::non_finite_float(var))
}

/// Removes `_` separators that sit between two ASCII digits, as in `1_000`.
///
/// Text with a misplaced underscore is returned unchanged so the parser
/// reports it.
fn without_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }
    let groups: Vec<&str> = text.split('_').collect();
    let between_digits = groups.windows(2).all(|pair| match pair {
        [left, right] => {
            left.ends_with(|c: char| c.is_ascii_digit())
                && right.starts_with(|c: char| c.is_ascii_digit())
        }
        _ => false,
    });
    if between_digits {
        Cow::Owned(groups.concat())
    } else {
        Cow::Borrowed(text)
    }
}

/// Truncates a decoded number toward zero.
fn truncate_number(number: &Number, var: &SelectedVar) -> EnvDictResult<Value> {
    if number.is_i64() || number.is_u64() {
        return Ok(Value::Number(number.clone()));
    }
    let float = number
        .as_f64()
        .ok_or_else(|| EnvDictError::non_finite_float(var))?;
    // Finite floats print without exponent, so the integral part parses exactly.
    integer_value(&format!("{:.0}", float.trunc()))
        .map_err(|_| EnvDictError::integer_out_of_range(var))
}

/// Widens a decoded number to a float.
fn widen_number(number: &Number, var: &SelectedVar) -> EnvDictResult<Value> {
    number
        .as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| EnvDictError::non_finite_float(var))
}

/// Maps a flag literal to its value, ignoring ASCII case.
fn parse_flag(text: &str) -> Option<Value> {
    const TRUE: [&str; 3] = ["yes", "true", "1"];
    const FALSE: [&str; 3] = ["no", "false", "0"];
    const NULL: [&str; 2] = ["none", "null"];

    let any_of = |literals: &[&str]| literals.iter().any(|lit| text.eq_ignore_ascii_case(lit));
    if any_of(&TRUE) {
        Some(Value::Bool(true))
    } else if any_of(&FALSE) {
        Some(Value::Bool(false))
    } else if any_of(&NULL) {
        Some(Value::Null)
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
