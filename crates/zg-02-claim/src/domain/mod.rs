//! Domain Layer - claim construction
//!
//! RULES:
//! - No I/O operations
//! - Pure functions only

pub mod exit_code;
pub mod output;

pub use exit_code::ExitCode;
pub use output::{build_output_claim, Output, NO_ASSUMPTIONS, OUTPUT_TAG};
