//! Binds the decoding feature files to the step registry.

use crate::fixtures::{DecodeContext, decode_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/parse_vars.feature",
    fixtures = [decode_context: DecodeContext]
);
