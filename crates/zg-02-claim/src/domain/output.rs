//! # Output Claim
//!
//! The claim surfaced at halt commits to the journal and the assumptions the
//! execution depends on:
//!
//! ```text
//! claim = tagged_struct("risc0.Output", [H(journal), assumptions])
//! ```
//!
//! The assumptions digest is supplied by the caller. Composing receipts is a
//! policy of the guest program, not of the assembler; unconditional
//! executions pass [`NO_ASSUMPTIONS`].

use serde::{Deserialize, Serialize};
use zg_01_digest::{
    hash_bytes_with, tagged_struct_with, BlockCompressor, Digest, Sha256Compressor,
};

/// Domain tag of the output struct.
pub const OUTPUT_TAG: &str = "risc0.Output";

/// Assumptions digest of an execution that composes no other receipts.
pub const NO_ASSUMPTIONS: Digest = Digest::ZERO;

/// Journal and assumptions committed to by a guest execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Digest of the journal bytes.
    pub journal: Digest,
    /// Digest of the assumptions list.
    pub assumptions: Digest,
}

impl Output {
    /// Output for raw journal bytes.
    pub fn from_journal(journal_bytes: &[u8], assumptions: Digest) -> Self {
        Self::from_journal_with(&Sha256Compressor, journal_bytes, assumptions)
    }

    /// Output for raw journal bytes, hashed with `compressor`.
    pub fn from_journal_with<C: BlockCompressor + ?Sized>(
        compressor: &C,
        journal_bytes: &[u8],
        assumptions: Digest,
    ) -> Self {
        Self {
            journal: hash_bytes_with(compressor, journal_bytes),
            assumptions,
        }
    }

    /// Claim digest of this output.
    pub fn digest(&self) -> Digest {
        self.digest_with(&Sha256Compressor)
    }

    /// Claim digest of this output, hashed with `compressor`.
    pub fn digest_with<C: BlockCompressor + ?Sized>(&self, compressor: &C) -> Digest {
        tagged_struct_with(compressor, OUTPUT_TAG, &[self.journal, self.assumptions])
    }
}

/// Claim digest for `journal_bytes` under `assumptions`.
///
/// The journal is always hashed, including when it is empty.
pub fn build_output_claim(journal_bytes: &[u8], assumptions: Digest) -> Digest {
    Output::from_journal(journal_bytes, assumptions).digest()
}
