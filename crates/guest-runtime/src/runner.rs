//! # Block Runner
//!
//! ```text
//! BlockInput ──init_genesis──→ CircuitKeeper
//!                                   │
//!     for each message: ensure_allowed(type_url) → execute
//!                                   │
//!                     outcomes + disabled list ──bincode──→ journal
//!                                   │
//!             GuestFinalizer: write_output(journal) → finalize(HALTED, NO_ASSUMPTIONS)
//! ```
//!
//! A rejected message is recorded and the block continues. Only setup
//! failures (bad config, bad genesis, store failures while reading the
//! final state) abort before the host is called.

use tracing::{debug, info, warn};
use zg_02_claim::{ExitCode, FinalizedClaim, GuestFinalizer, HostBoundary, NO_ASSUMPTIONS};
use zg_03_circuit::{
    AddressCodec, CircuitConfig, CircuitKeeper, CircuitMsg, CircuitStore, HexAddressCodec,
    InMemoryCircuitStore,
};

use crate::error::RuntimeError;
use crate::input::BlockInput;
use crate::journal::{BlockJournal, MessageOutcome};

/// What a finished block produced.
#[derive(Debug, Clone)]
pub struct BlockReport {
    pub journal: BlockJournal,
    pub journal_bytes: Vec<u8>,
    pub finalized: FinalizedClaim,
}

/// Keeper over the in-memory store, configured from `config`.
pub fn build_keeper(
    config: &CircuitConfig,
) -> Result<CircuitKeeper<InMemoryCircuitStore, HexAddressCodec>, RuntimeError> {
    Ok(CircuitKeeper::new(
        InMemoryCircuitStore::new(),
        HexAddressCodec::new(config.address_len),
        config,
    )?)
}

/// Execute `messages` in order against `keeper`.
pub fn execute_messages<S: CircuitStore, C: AddressCodec>(
    keeper: &CircuitKeeper<S, C>,
    messages: &[CircuitMsg],
) -> Vec<MessageOutcome> {
    let mut outcomes = Vec::with_capacity(messages.len());

    for (index, msg) in (0u32..).zip(messages) {
        let type_url = msg.type_url();
        let result = keeper
            .ensure_allowed(&[type_url])
            .and_then(|()| keeper.execute(msg));

        let outcome = match result {
            Ok(_) => {
                debug!(index, type_url, "Message applied");
                MessageOutcome::applied(index, type_url)
            }
            Err(e) => {
                warn!(index, type_url, error = %e, "Message rejected");
                MessageOutcome::rejected(index, type_url, e)
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Run one block and finalize it through `host`.
pub fn run_block<H: HostBoundary>(
    input: &BlockInput,
    config: &CircuitConfig,
    host: H,
) -> Result<BlockReport, RuntimeError> {
    let keeper = build_keeper(config)?;
    keeper.init_genesis(&input.genesis)?;

    let outcomes = execute_messages(&keeper, &input.messages);
    let journal = BlockJournal {
        outcomes,
        disabled_type_urls: keeper.disabled_list()?,
    };
    let journal_bytes = journal.encode()?;

    let finalized = GuestFinalizer::new(host)
        .write_output(&journal_bytes)
        .finalize(ExitCode::HALTED, NO_ASSUMPTIONS);

    info!(
        messages = input.messages.len(),
        applied = journal.applied(),
        disabled = journal.disabled_type_urls.len(),
        claim = %finalized.claim,
        "Block finalized"
    );

    Ok(BlockReport {
        journal,
        journal_bytes,
        finalized,
    })
}
