//! `rstest-bdd` behavioural suite for `env_dict`.
//!
//! Fixtures hold the scenario state, steps drive `parse_vars`, and the
//! scenarios module binds the feature files under `tests/features`.

mod fixtures;
mod scenarios;
mod steps;
