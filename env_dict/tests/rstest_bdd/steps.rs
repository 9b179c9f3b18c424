//! Step definitions driving `parse_vars`.

use crate::fixtures::{DecodeContext, Failure};
use anyhow::{Result, anyhow, ensure};
use env_dict::{ListAppendError, ParseOptions, parse_vars};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::{json, unquote};
use test_helpers::vars::object;

#[given("the seed tree {tree}")]
fn seed_tree(decode_context: &DecodeContext, tree: String) -> Result<()> {
    ensure!(decode_context.seed.is_empty(), "seed tree already initialised");
    decode_context.seed.set(object(json(&tree)?)?);
    Ok(())
}

#[given("the variable {key} is {value}")]
fn variable(decode_context: &DecodeContext, key: String, value: String) {
    let mut vars = decode_context.vars.take().unwrap_or_default();
    vars.push((unquote(&key).to_owned(), unquote(&value).to_owned()));
    decode_context.vars.set(vars);
}

#[when("the variables are parsed with prefix {prefix}")]
fn parse(decode_context: &DecodeContext, prefix: String) {
    let vars = decode_context.vars.take().unwrap_or_default();
    let seed = decode_context.seed.take();
    let outcome = parse_vars(&vars, seed.as_ref(), &ParseOptions::new(unquote(&prefix)))
        .map_err(|err| Failure {
            message: err.to_string(),
            list_append: err.list_append_kind().cloned(),
        });
    decode_context.outcome.set(outcome);
}

#[then("the tree equals {expected}")]
fn tree_equals(decode_context: &DecodeContext, expected: String) -> Result<()> {
    let tree = decode_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("variables were not parsed"))?
        .map_err(|failure| anyhow!("parse failed: {}", failure.message))?;
    let want = object(json(&expected)?)?;
    ensure!(tree == want, "unexpected tree {tree:?}; expected {want:?}");
    Ok(())
}

#[then("parsing fails with a {kind} list-append error")]
fn list_append_failure(decode_context: &DecodeContext, kind: String) -> Result<()> {
    let failure = failure(decode_context)?;
    let matched = matches!(
        (kind.as_str(), failure.list_append.as_ref()),
        ("no-target", Some(ListAppendError::NoTarget))
            | ("target-not-list", Some(ListAppendError::TargetNotList { .. }))
            | ("input-not-list", Some(ListAppendError::InputNotList { .. }))
            | ("breaking-route", Some(ListAppendError::BreakingRoute { .. }))
    );
    ensure!(matched, "expected a {kind} error, got {failure:?}");
    Ok(())
}

#[then("the error message starts with {prefix}")]
fn message_starts_with(decode_context: &DecodeContext, prefix: String) -> Result<()> {
    let failure = failure(decode_context)?;
    ensure!(
        failure.message.starts_with(unquote(&prefix)),
        "unexpected message {:?}",
        failure.message
    );
    Ok(())
}

#[then("parsing fails with a message mentioning {text}")]
fn message_mentions(decode_context: &DecodeContext, text: String) -> Result<()> {
    let failure = failure(decode_context)?;
    ensure!(
        failure.message.contains(unquote(&text)),
        "unexpected message {:?}",
        failure.message
    );
    Ok(())
}

fn failure(decode_context: &DecodeContext) -> Result<Failure> {
    match decode_context.outcome.get() {
        Some(Err(failure)) => Ok(failure),
        Some(Ok(tree)) => Err(anyhow!("expected parsing to fail, got {tree:?}")),
        None => Err(anyhow!("variables were not parsed")),
    }
}
