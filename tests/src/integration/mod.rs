//! Cross-crate integration tests.

pub mod finalization;
pub mod runtime_flows;
