//! Entry points decoding a variable source into a tree.

use tracing::{debug, trace};

use crate::decode::Decoder;
use crate::names::select;
use crate::route::{Route, put_nested};
use crate::{EnvDictError, EnvDictResult, ParseOptions, ProcessEnv, Tree, VarSource};

/// Decodes the variables of `source` selected by `options` into a tree.
///
/// The tree starts as a copy of `initial_vars` (or empty); the caller's tree
/// is never modified. Selected variables are applied in ascending order of
/// their translated key, so a plain entry initialising a list is written
/// before a list-append entry for the same destination.
///
/// Keys whose route contains an empty segment are skipped.
///
/// # Examples
///
/// ```
/// use env_dict::{ParseOptions, Tree, parse_vars};
/// use serde_json::json;
///
/// let initial: Tree = serde_json::from_value(json!({"c": [1, 2], "d": {"a": 1}}))?;
/// let source = [("V_c_LIST_APPEND", "3;4"), ("V_d__e_NUMBER", "5"), ("OTHER", "x")];
/// let tree = parse_vars(&source, Some(&initial), &ParseOptions::new("V_"))?;
/// assert_eq!(
///     serde_json::Value::Object(tree),
///     json!({"c": [1, 2, "3", "4"], "d": {"a": 1, "e": 5}})
/// );
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an [`EnvDictError`] when a value cannot be converted according to
/// its suffix or a list-append write is rejected. Decoding stops at the first
/// failure; no partial tree is returned.
pub fn parse_vars<S>(
    source: &S,
    initial_vars: Option<&Tree>,
    options: &ParseOptions,
) -> EnvDictResult<Tree>
where
    S: VarSource + ?Sized,
{
    let mut result = initial_vars.cloned().unwrap_or_default();
    let selected = select(source.vars(), options.prefix(), options.names_replaces());
    debug!(
        prefix = options.prefix(),
        selected = selected.len(),
        "decoding variables"
    );

    let decoder = Decoder::new(options);
    for (key, var) in &selected {
        let decoded = decoder.decode(key, var)?;
        let Some(route) = Route::parse(decoded.key, options.dict_level_separator()) else {
            debug!(key = %var.key, "skipping variable with an empty key segment");
            continue;
        };
        trace!(
            key = %var.key,
            depth = route.depth(),
            append = decoded.append,
            "writing decoded variable"
        );
        put_nested(&mut result, &route, decoded.value, decoded.append)
            .map_err(|err| EnvDictError::from_route(var, err))?;
    }
    Ok(result)
}

/// Decodes the process environment.
///
/// Equivalent to [`parse_vars`] with [`ProcessEnv`] as the source.
///
/// # Errors
///
/// See [`parse_vars`].
pub fn parse_env(initial_vars: Option<&Tree>, options: &ParseOptions) -> EnvDictResult<Tree> {
    parse_vars(&ProcessEnv, initial_vars, options)
}
