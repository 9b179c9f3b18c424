//! Test helpers shared across the env-dict workspace.
//!
//! Provides jailed process-environment execution, variable source builders
//! and placeholder parsing for behavioural steps.

pub mod jail;
pub mod text;
pub mod vars;
