//! Digest error types.

use thiserror::Error;

/// Errors raised while parsing or converting digests.
///
/// Hashing itself never returns an error: a sizing inconsistency in the
/// padding engine aborts the invocation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// Input was not valid hexadecimal
    #[error("Invalid hex digest: {0}")]
    InvalidHex(String),

    /// Input had the wrong number of bytes
    #[error("Invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}
