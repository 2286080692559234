//! In-memory host that records what the guest handed over.

use zg_01_digest::Digest;

use crate::domain::ExitCode;
use crate::ports::HostBoundary;

/// Snapshot of the calls a [`RecordingHost`] received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    /// Bytes passed to `write_output`, if it was called.
    pub journal: Option<Vec<u8>>,
    /// Exit code and claim passed to `finalize`, if it was called.
    pub halt: Option<(ExitCode, Digest)>,
    /// Total boundary calls.
    pub calls: usize,
}

/// Host boundary that records calls instead of halting.
#[derive(Debug, Default)]
pub struct RecordingHost {
    record: HostRecord,
}

impl RecordingHost {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls so far.
    pub fn record(&self) -> &HostRecord {
        &self.record
    }

    /// Journal bytes, if written.
    pub fn journal(&self) -> Option<&[u8]> {
        self.record.journal.as_deref()
    }

    /// Claim digest, if finalized.
    pub fn claim(&self) -> Option<Digest> {
        self.record.halt.map(|(_, claim)| claim)
    }

    /// Whether `finalize` has been called.
    pub fn is_halted(&self) -> bool {
        self.record.halt.is_some()
    }
}

impl HostBoundary for RecordingHost {
    fn write_output(&mut self, bytes: &[u8]) {
        self.record.calls += 1;
        self.record.journal = Some(bytes.to_vec());
    }

    fn finalize(&mut self, exit_code: ExitCode, claim: &Digest) {
        self.record.calls += 1;
        self.record.halt = Some((exit_code, *claim));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls() {
        let mut host = RecordingHost::new();
        assert!(!host.is_halted());

        host.write_output(b"journal");
        host.finalize(ExitCode::HALTED, &Digest::ZERO);

        assert_eq!(host.journal(), Some(&b"journal"[..]));
        assert_eq!(host.claim(), Some(Digest::ZERO));
        assert_eq!(host.record().calls, 2);
    }
}
