//! Unit tests for suffix decoding.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::{Decoder, parse_flag};
use crate::names::SelectedVar;
use crate::{EnvDictError, ParseOptions, Suffixes};

#[fixture]
fn options() -> ParseOptions {
    ParseOptions::new("V_")
}

fn var(key: &str, value: &str) -> SelectedVar {
    SelectedVar {
        key: format!("V_{key}"),
        value: value.to_owned(),
    }
}

fn decode(
    options: &ParseOptions,
    key: &str,
    value: &str,
) -> Result<(String, Value, bool), EnvDictError> {
    let decoder = Decoder::new(options);
    let selected = var(key, value);
    decoder
        .decode(key, &selected)
        .map(|decoded| (decoded.key.to_owned(), decoded.value, decoded.append))
}

#[rstest]
#[case("a", "2", "a", json!("2"))]
#[case("a_NUMBER", "2", "a", json!(2))]
#[case("a_NUMBER", " -17 ", "a", json!(-17))]
#[case("a_NUMBER", "18446744073709551615", "a", json!(18_446_744_073_709_551_615_u64))]
#[case("ratio_FLOAT", "0.25", "ratio", json!(0.25))]
#[case("hosts_LIST", "a;b;;c", "hosts", json!(["a", "b", "", "c"]))]
#[case("hosts_LIST", "", "hosts", json!([""]))]
#[case("debug_FLAG", "Yes", "debug", json!(true))]
#[case("debug_FLAG", "0", "debug", json!(false))]
#[case("debug_FLAG", "NULL", "debug", Value::Null)]
#[case("cfg_JSON", r#"{"a": [1, {"b": null}]}"#, "cfg", json!({"a": [1, {"b": null}]}))]
#[case("nested__key_NUMBER", "5", "nested__key", json!(5))]
fn decodes_single_suffix(
    options: ParseOptions,
    #[case] key: &str,
    #[case] value: &str,
    #[case] expected_key: &str,
    #[case] expected: Value,
) -> Result<(), EnvDictError> {
    let (decoded_key, decoded, append) = decode(&options, key, value)?;
    assert_eq!(decoded_key, expected_key);
    assert_eq!(decoded, expected);
    assert!(!append);
    Ok(())
}

#[rstest]
fn stacked_suffixes_apply_right_to_left(options: ParseOptions) -> Result<(), EnvDictError> {
    let (key, value, _) = decode(&options, "port_NUMBER_JSON", r#""8080""#)?;
    assert_eq!(key, "port");
    assert_eq!(value, json!(8080));
    Ok(())
}

#[rstest]
#[case("r_FLOAT_NUMBER", "3", json!(3.0))]
#[case("r_NUMBER_FLOAT", "3.7", json!(3))]
#[case("r_NUMBER_FLOAT", "-3.7", json!(-3))]
#[case("r_NUMBER_JSON", "8080", json!(8080))]
#[case("r_NUMBER_JSON", "2.5", json!(2))]
#[case("r_FLOAT_JSON", "2", json!(2.0))]
#[case("r_NUMBER_NUMBER", "7", json!(7))]
fn numeric_suffixes_accept_decoded_numbers(
    options: ParseOptions,
    #[case] key: &str,
    #[case] value: &str,
    #[case] expected: Value,
) {
    let decoded = decode(&options, key, value).map(|(name, number, _)| (name, number));
    assert_eq!(decoded.ok(), Some(("r".to_owned(), expected)));
}

#[rstest]
fn truncated_numbers_must_fit_in_64_bits(options: ParseOptions) {
    let err = decode(&options, "r_NUMBER_FLOAT", "1e30").err();
    assert!(
        matches!(err, Some(EnvDictError::IntegerOutOfRange { .. })),
        "unexpected outcome {err:?}"
    );
}

#[rstest]
#[case("r_NUMBER", "1_000", json!(1000))]
#[case("r_NUMBER", "-12_345_678", json!(-12_345_678))]
#[case("r_FLOAT", "1_000.5", json!(1000.5))]
fn digit_separators_are_accepted(
    options: ParseOptions,
    #[case] key: &str,
    #[case] value: &str,
    #[case] expected: Value,
) {
    let decoded = decode(&options, key, value).map(|(_, number, _)| number);
    assert_eq!(decoded.ok(), Some(expected));
}

#[rstest]
#[case("c_LIST_APPEND", "3;4", json!(["3", "4"]))]
#[case("c_LIST_APPEND_JSON", "[5, 6]", json!([5, 6]))]
#[case("c_LIST_APPEND_LIST", "x;y", json!(["x", "y"]))]
#[case("c_LIST_APPEND_NUMBER", "7", json!(7))]
fn list_append_marks_entry(
    options: ParseOptions,
    #[case] key: &str,
    #[case] value: &str,
    #[case] expected: Value,
) -> Result<(), EnvDictError> {
    let (decoded_key, decoded, append) = decode(&options, key, value)?;
    assert_eq!(decoded_key, "c");
    assert_eq!(decoded, expected);
    assert!(append);
    Ok(())
}

#[rstest]
fn custom_suffixes_replace_defaults() -> Result<(), EnvDictError> {
    let options = ParseOptions::new("V_").with_suffixes(Suffixes {
        integer: "_INT".to_owned(),
        ..Suffixes::default()
    });
    let (key, value, _) = decode(&options, "a_INT", "3")?;
    assert_eq!((key.as_str(), value), ("a", json!(3)));
    let (untouched, raw, _) = decode(&options, "a_NUMBER", "3")?;
    assert_eq!((untouched.as_str(), raw), ("a_NUMBER", json!("3")));
    Ok(())
}

#[rstest]
fn empty_suffix_disables_conversion() -> Result<(), EnvDictError> {
    let options = ParseOptions::new("V_").with_suffixes(Suffixes {
        json: String::new(),
        ..Suffixes::default()
    });
    let (key, value, _) = decode(&options, "a", "[1]")?;
    assert_eq!((key.as_str(), value), ("a", json!("[1]")));
    Ok(())
}

#[rstest]
#[case("x_NUMBER", "abc")]
#[case("x_NUMBER", "1.5")]
#[case("x_NUMBER", "_1")]
#[case("x_NUMBER", "1__0")]
#[case("x_NUMBER", "1_")]
#[case("x_NUMBER", "99999999999999999999999")]
fn rejects_malformed_integers(options: ParseOptions, #[case] key: &str, #[case] value: &str) {
    let err = decode(&options, key, value).err();
    assert!(
        matches!(err, Some(EnvDictError::InvalidInteger { .. })),
        "unexpected outcome {err:?}"
    );
}

#[rstest]
#[case("nope", false)]
#[case("inf", true)]
fn rejects_unusable_floats(options: ParseOptions, #[case] value: &str, #[case] non_finite: bool) {
    match decode(&options, "x_FLOAT", value) {
        Err(EnvDictError::NonFiniteFloat { .. }) => assert!(non_finite),
        Err(EnvDictError::InvalidFloat { .. }) => assert!(!non_finite),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[rstest]
fn unknown_flag_names_the_variable(options: ParseOptions) {
    let Err(err) = decode(&options, "debug_FLAG", "maybe") else {
        panic!("expected bool conversion to fail");
    };
    assert!(matches!(err, EnvDictError::InvalidBool { .. }));
    let message = err.to_string();
    assert!(message.contains("V_debug_FLAG=maybe"), "message: {message}");
    assert!(message.contains("`maybe`"), "message: {message}");
}

#[rstest]
fn malformed_json_is_reported(options: ParseOptions) {
    let err = decode(&options, "cfg_JSON", "{oops").err();
    assert!(matches!(err, Some(EnvDictError::InvalidJson { .. })));
}

#[rstest]
fn conversion_of_decoded_value_is_rejected(options: ParseOptions) {
    match decode(&options, "x_FLAG_JSON", "[1]") {
        Err(EnvDictError::AlreadyDecoded { suffix, found, .. }) => {
            assert_eq!(suffix, "_FLAG");
            assert_eq!(found, "array");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[rstest]
#[case("x_LIST_NUMBER", "5", "_LIST", "number")]
#[case("x_FLAG_NUMBER", "1", "_FLAG", "number")]
#[case("x_JSON_FLOAT", "1.5", "_JSON", "number")]
#[case("x_NUMBER_FLAG", "yes", "_NUMBER", "boolean")]
#[case("x_FLOAT_LIST", "1;2", "_FLOAT", "array")]
fn non_numeric_stacks_stay_rejected(
    options: ParseOptions,
    #[case] key: &str,
    #[case] value: &str,
    #[case] suffix: &str,
    #[case] found: &str,
) {
    match decode(&options, key, value) {
        Err(EnvDictError::AlreadyDecoded {
            suffix: rejected,
            found: kind,
            ..
        }) => {
            assert_eq!(rejected, suffix);
            assert_eq!(kind, found);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[rstest]
#[case("x_LIST")]
#[case("x_LIST_APPEND")]
fn list_suffixes_need_a_separator(#[case] key: &str) {
    let options = ParseOptions::new("V_").with_list_separator("");
    let err = decode(&options, key, "a;b").err();
    assert!(
        matches!(err, Some(EnvDictError::EmptyListSeparator { .. })),
        "unexpected outcome {err:?}"
    );
}

#[rstest]
#[case("yes", Some(json!(true)))]
#[case("TRUE", Some(json!(true)))]
#[case("tRuE", Some(json!(true)))]
#[case("1", Some(json!(true)))]
#[case("No", Some(json!(false)))]
#[case("false", Some(json!(false)))]
#[case("0", Some(json!(false)))]
#[case("None", Some(Value::Null))]
#[case("null", Some(Value::Null))]
#[case("", None)]
#[case("y", None)]
#[case(" yes", None)]
fn flag_literals(#[case] literal: &str, #[case] expected: Option<Value>) {
    assert_eq!(parse_flag(literal), expected);
}
