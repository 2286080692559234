//! # Finalization Flow
//!
//! Journal bytes travel through padding, compression and the tagged-struct
//! builder into the claim handed to the host.
//!
//! ```text
//! journal ──pad──→ blocks ──compress(IV)──→ H(journal)
//!                                              │
//!   tagged_struct("risc0.Output", [H(journal), assumptions]) ──→ host.finalize
//! ```

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sha2::{Digest as _, Sha256};

    use zg_01_digest::{hash_bytes, pad, tagged_struct, Digest, SHA256_IV};
    use zg_02_claim::{
        build_output_claim, finalize_guest, ExitCode, GuestFinalizer, HostBoundary, Output,
        RecordingHost, NO_ASSUMPTIONS, OUTPUT_TAG,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn digest(hex: &str) -> Digest {
        hex.parse().unwrap()
    }

    fn sha256(bytes: &[u8]) -> Digest {
        Digest::from_bytes(&Sha256::digest(bytes)).unwrap()
    }

    /// Host counting boundary calls.
    #[derive(Default)]
    struct CountingHost {
        writes: usize,
        finalizes: usize,
    }

    impl HostBoundary for CountingHost {
        fn write_output(&mut self, _bytes: &[u8]) {
            self.writes += 1;
        }

        fn finalize(&mut self, _exit_code: ExitCode, _claim: &Digest) {
            self.finalizes += 1;
        }
    }

    // =============================================================================
    // KNOWN VECTORS
    // =============================================================================

    #[test]
    fn test_empty_journal_claim_vector() {
        let mut host = RecordingHost::new();
        let finalized = finalize_guest(&mut host, &[], ExitCode::HALTED, NO_ASSUMPTIONS);

        assert_eq!(
            finalized.output.journal,
            digest("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(
            finalized.claim,
            digest("836f175c62c0f353831665427e8b0b34f6d1d21902764daeb406c6b83db575b0")
        );
        assert_eq!(host.claim(), Some(finalized.claim));
    }

    #[test]
    fn test_small_journal_claim_vector() {
        assert_eq!(
            build_output_claim(&[0, 1, 2, 3], NO_ASSUMPTIONS),
            digest("74b4e33291a7218dc04337e230317167457f581078d76fa792ff000c9f29e466")
        );
    }

    #[test]
    fn test_claim_matches_manual_serialization() {
        let journal = b"manual claim";
        let mut preimage = sha256(OUTPUT_TAG.as_bytes()).to_bytes().to_vec();
        preimage.extend_from_slice(&sha256(journal).to_bytes());
        preimage.extend_from_slice(&NO_ASSUMPTIONS.to_bytes());
        preimage.extend_from_slice(&2u16.to_le_bytes());

        let claim = build_output_claim(journal, NO_ASSUMPTIONS);
        assert_eq!(claim, sha256(&preimage));
    }

    #[test]
    fn test_iv_matches_standard_initial_state() {
        let standard: [u32; 8] = [
            0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
            0x5be0cd19,
        ];
        let mut bytes = Vec::new();
        for word in standard {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        assert_eq!(SHA256_IV.to_bytes().to_vec(), bytes);
    }

    // =============================================================================
    // BOUNDARY DISCIPLINE
    // =============================================================================

    #[test]
    fn test_each_boundary_call_happens_once() {
        let mut host = CountingHost::default();
        GuestFinalizer::new(&mut host)
            .write_output(b"journal")
            .finalize(ExitCode::HALTED, NO_ASSUMPTIONS);

        assert_eq!(host.writes, 1);
        assert_eq!(host.finalizes, 1);
    }

    #[test]
    fn test_assumptions_change_claim_not_journal() {
        let assumptions = tagged_struct("risc0.Assumptions", &[hash_bytes(b"receipt")]);
        let with = Output::from_journal(b"j", assumptions);
        let without = Output::from_journal(b"j", NO_ASSUMPTIONS);

        assert_eq!(with.journal, without.journal);
        assert_ne!(with.digest(), without.digest());
    }

    proptest! {
        #[test]
        fn prop_journal_digest_is_standard_sha256(
            journal in prop::collection::vec(any::<u8>(), 0..300),
        ) {
            let output = Output::from_journal(&journal, NO_ASSUMPTIONS);
            prop_assert_eq!(output.journal, sha256(&journal));
            prop_assert_eq!(pad(&journal).len() % 64, 0);
        }

        #[test]
        fn prop_claim_is_deterministic(journal in prop::collection::vec(any::<u8>(), 0..200)) {
            prop_assert_eq!(
                build_output_claim(&journal, NO_ASSUMPTIONS),
                build_output_claim(&journal, NO_ASSUMPTIONS)
            );
        }
    }
}
