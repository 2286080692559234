//! # Guest Runtime
//!
//! The guest program run inside the zkVM: executes one block of
//! circuit-breaker messages and commits the result.
//!
//! ## Modular Structure
//!
//! - `input` - JSON block description (genesis + messages)
//! - `runner` - keeper setup, message execution, finalization
//! - `journal` - committed outcomes and their bincode encoding
//! - `host` - host adapter printing journal and claim
//! - `error` - runtime errors

pub mod error;
pub mod host;
pub mod input;
pub mod journal;
pub mod runner;

pub use error::RuntimeError;
pub use host::StdoutHost;
pub use input::BlockInput;
pub use journal::{BlockJournal, MessageOutcome};
pub use runner::{build_keeper, execute_messages, run_block, BlockReport};
