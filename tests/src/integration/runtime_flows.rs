//! # Runtime Flows
//!
//! Genesis state and a block of circuit messages go in; the journal and the
//! claim committed through the host come out.
//!
//! ```text
//! genesis ──init──→ keeper ──block──→ outcomes ──bincode──→ journal ──→ claim
//! ```

#[cfg(test)]
mod tests {
    use guest_runtime::{run_block, BlockInput, BlockJournal, MessageOutcome};
    use zg_02_claim::{build_output_claim, RecordingHost, NO_ASSUMPTIONS};
    use zg_03_circuit::{
        CircuitConfig, CircuitMsg, GenesisAccountPermissions, GenesisState,
        MsgAuthorizeCircuitBreaker, MsgResetCircuitBreaker, MsgTripCircuitBreaker,
        PermissionLevel, Permissions,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const GOV: &str = "0x1111111111111111111111111111111111111111";
    const GUARDIAN: &str = "0x2222222222222222222222222222222222222222";
    const OPERATOR: &str = "0x3333333333333333333333333333333333333333";
    const SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
    const DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";

    fn config() -> CircuitConfig {
        CircuitConfig::default().with_authority(GOV)
    }

    fn authorize(granter: &str, grantee: &str, permissions: Permissions) -> CircuitMsg {
        CircuitMsg::Authorize(MsgAuthorizeCircuitBreaker {
            granter: granter.to_string(),
            grantee: grantee.to_string(),
            permissions: Some(permissions),
        })
    }

    fn trip(signer: &str, urls: &[&str]) -> CircuitMsg {
        CircuitMsg::Trip(MsgTripCircuitBreaker {
            authority: signer.to_string(),
            msg_type_urls: urls.iter().map(|u| u.to_string()).collect(),
        })
    }

    fn reset(signer: &str, urls: &[&str]) -> CircuitMsg {
        CircuitMsg::Reset(MsgResetCircuitBreaker {
            authority: signer.to_string(),
            msg_type_urls: urls.iter().map(|u| u.to_string()).collect(),
        })
    }

    fn outcome_flags(journal: &BlockJournal) -> Vec<bool> {
        journal.outcomes.iter().map(|o| o.success).collect()
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    /// Incident response: governance appoints a guardian, the guardian
    /// delegates a narrow grant, the operator trips and later resets.
    #[test]
    fn test_incident_response_block() {
        let input = BlockInput {
            genesis: GenesisState::default(),
            messages: vec![
                authorize(GOV, GUARDIAN, Permissions::new(PermissionLevel::SuperAdmin)),
                authorize(GUARDIAN, OPERATOR, Permissions::some_msgs([SEND])),
                trip(OPERATOR, &[SEND]),
                trip(OPERATOR, &[DELEGATE]),
                trip(GUARDIAN, &[DELEGATE]),
                reset(OPERATOR, &[SEND]),
            ],
        };

        let mut host = RecordingHost::new();
        let report = run_block(&input, &config(), &mut host).unwrap();

        assert_eq!(
            outcome_flags(&report.journal),
            vec![true, true, true, false, true, true]
        );
        assert_eq!(
            report.journal.disabled_type_urls,
            vec![DELEGATE.to_string()]
        );

        let journal = host.journal().unwrap();
        assert_eq!(BlockJournal::decode(journal).unwrap(), report.journal);
        let expected = build_output_claim(journal, NO_ASSUMPTIONS);
        assert_eq!(host.claim(), Some(expected));
    }

    /// A message listing a duplicate id is rejected whole.
    #[test]
    fn test_duplicate_ids_leave_state_untouched() {
        let input = BlockInput {
            genesis: GenesisState::default(),
            messages: vec![trip(GOV, &[SEND, DELEGATE, SEND])],
        };
        let report = run_block(&input, &config(), RecordingHost::new()).unwrap();

        assert_eq!(
            report.journal.outcomes,
            vec![MessageOutcome::rejected(
                0,
                CircuitMsg::TRIP_TYPE_URL,
                format!("Message {SEND} is already disabled")
            )]
        );
        assert!(report.journal.disabled_type_urls.is_empty());
    }

    /// Genesis export after a block seeds an identical next block.
    #[test]
    fn test_genesis_carries_across_blocks() {
        let first = BlockInput {
            genesis: GenesisState {
                account_permissions: vec![GenesisAccountPermissions {
                    address: GUARDIAN.to_string(),
                    permissions: Permissions::new(PermissionLevel::AllMsgs),
                }],
                disabled_type_urls: vec![],
            },
            messages: vec![trip(GUARDIAN, &[SEND])],
        };
        let report = run_block(&first, &config(), RecordingHost::new()).unwrap();

        let second = BlockInput {
            genesis: GenesisState {
                account_permissions: first.genesis.account_permissions.clone(),
                disabled_type_urls: report.journal.disabled_type_urls.clone(),
            },
            messages: vec![trip(GUARDIAN, &[SEND]), reset(GUARDIAN, &[SEND])],
        };
        let report = run_block(&second, &config(), RecordingHost::new()).unwrap();

        assert_eq!(outcome_flags(&report.journal), vec![false, true]);
        assert!(report.journal.disabled_type_urls.is_empty());
    }

    /// Same block, different outcome, different claim.
    #[test]
    fn test_claim_binds_outcomes() {
        let granted = BlockInput {
            genesis: GenesisState::default(),
            messages: vec![trip(GOV, &[SEND])],
        };
        let refused = BlockInput {
            genesis: GenesisState::default(),
            messages: vec![trip(OPERATOR, &[SEND])],
        };

        let a = run_block(&granted, &config(), RecordingHost::new()).unwrap();
        let b = run_block(&refused, &config(), RecordingHost::new()).unwrap();
        assert_ne!(a.finalized.claim, b.finalized.claim);
    }

    #[test]
    fn test_json_input_drives_block() {
        let json = format!(
            r#"{{
                "genesis": {{ "disabled_type_urls": ["{SEND}"] }},
                "messages": [
                    {{ "type": "reset", "authority": "{GOV}", "msg_type_urls": ["{SEND}"] }}
                ]
            }}"#
        );
        let input = BlockInput::from_json(&json).unwrap();
        let report = run_block(&input, &config(), RecordingHost::new()).unwrap();

        assert_eq!(report.journal.applied(), 1);
        assert!(report.journal.disabled_type_urls.is_empty());
    }
}
