//! Runtime errors.

use std::path::PathBuf;

use thiserror::Error;
use zg_03_circuit::CircuitError;

/// Errors that stop a block before it is finalized.
///
/// A message that fails inside the block is not one of these; it is
/// recorded as a failed outcome in the journal.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Input file could not be read.
    #[error("Failed to read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a valid block description.
    #[error("Invalid block input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Keeper construction or genesis failed.
    #[error("Circuit setup failed: {0}")]
    Circuit(#[from] CircuitError),

    /// Journal could not be encoded or decoded.
    #[error("Journal codec error: {0}")]
    Journal(#[from] bincode::Error),
}
