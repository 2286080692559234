//! # Guest Finalizer
//!
//! Linear pipeline run once per invocation, right before halt:
//!
//! ```text
//! GuestFinalizer ──write_output──→ JournalCommitted ──finalize──→ FinalizedClaim
//!                  (journal digest,                  (claim digest,
//!                   host.write_output)                host.finalize)
//! ```
//!
//! Each stage is consumed by the next one, so the host sees at most one
//! `write_output` followed by at most one `finalize`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use zg_01_digest::{hash_bytes_with, BlockCompressor, Digest, Sha256Compressor};

use crate::domain::{ExitCode, Output};
use crate::ports::HostBoundary;

/// Pending stage: nothing has been written yet.
#[must_use = "the guest must write its output and finalize"]
pub struct GuestFinalizer<H: HostBoundary, C: BlockCompressor = Sha256Compressor> {
    host: H,
    compressor: C,
}

impl<H: HostBoundary> GuestFinalizer<H, Sha256Compressor> {
    /// Finalizer hashing with the software compressor.
    pub fn new(host: H) -> Self {
        Self::with_compressor(host, Sha256Compressor)
    }
}

impl<H: HostBoundary, C: BlockCompressor> GuestFinalizer<H, C> {
    /// Finalizer hashing with `compressor`.
    pub fn with_compressor(host: H, compressor: C) -> Self {
        Self { host, compressor }
    }

    /// Hash the journal and publish it to the host.
    pub fn write_output(mut self, journal: &[u8]) -> JournalCommitted<H, C> {
        let journal_digest = hash_bytes_with(&self.compressor, journal);
        self.host.write_output(journal);
        debug!(len = journal.len(), journal = %journal_digest, "Journal written");

        JournalCommitted {
            host: self.host,
            compressor: self.compressor,
            journal: journal_digest,
        }
    }
}

/// Journal published; only finalization remains.
#[must_use = "the guest must finalize after writing its output"]
pub struct JournalCommitted<H: HostBoundary, C: BlockCompressor = Sha256Compressor> {
    host: H,
    compressor: C,
    journal: Digest,
}

impl<H: HostBoundary, C: BlockCompressor> JournalCommitted<H, C> {
    /// Digest of the published journal.
    pub fn journal_digest(&self) -> Digest {
        self.journal
    }

    /// Compose the claim and hand it to the host.
    pub fn finalize(mut self, exit_code: ExitCode, assumptions: Digest) -> FinalizedClaim {
        let output = Output {
            journal: self.journal,
            assumptions,
        };
        let claim = output.digest_with(&self.compressor);
        self.host.finalize(exit_code, &claim);
        info!(%exit_code, %claim, "Guest finalized");

        FinalizedClaim {
            exit_code,
            output,
            claim,
        }
    }
}

/// What was handed to the host at halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedClaim {
    /// Exit code passed to `finalize`.
    pub exit_code: ExitCode,
    /// Journal and assumptions digests.
    pub output: Output,
    /// Claim digest passed to `finalize`.
    pub claim: Digest,
}

/// Write `journal`, then finalize with `assumptions` and `exit_code`.
pub fn finalize_guest<H: HostBoundary>(
    host: H,
    journal: &[u8],
    exit_code: ExitCode,
    assumptions: Digest,
) -> FinalizedClaim {
    GuestFinalizer::new(host)
        .write_output(journal)
        .finalize(exit_code, assumptions)
}
