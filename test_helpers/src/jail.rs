//! Runs code against an isolated process environment.
//!
//! Wraps [`figment::Jail`], which serialises access to the environment and
//! restores every variable it set once the closure returns.

use anyhow::{Result, anyhow};

/// Sets `vars` inside a [`figment::Jail`] and returns the output of `f`.
///
/// # Examples
///
/// ```
/// use env_dict_test_helpers::jail::with_vars;
///
/// let seen = with_vars(&[("ENV_DICT_DOC_PROBE", "1")], || {
///     std::env::var("ENV_DICT_DOC_PROBE").ok()
/// })?;
/// assert_eq!(seen.as_deref(), Some("1"));
/// # Ok::<_, anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the jail cannot be initialised.
pub fn with_vars<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        for (key, value) in vars {
            jail.set_env(key, value);
        }
        output = Some(f());
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}
