//! Shared fixtures for the behavioural suite.

use env_dict::{ListAppendError, Tree};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Summary of a failed parse kept between steps.
#[derive(Clone, Debug)]
pub struct Failure {
    pub message: String,
    pub list_append: Option<ListAppendError>,
}

/// State shared by the steps of one decoding scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct DecodeContext {
    pub seed: Slot<Tree>,
    pub vars: Slot<Vec<(String, String)>>,
    pub outcome: Slot<Result<Tree, Failure>>,
}

/// Creates an empty decoding context.
#[fixture]
pub fn decode_context() -> DecodeContext {
    DecodeContext::default()
}
