//! # ZG-02 Claim
//!
//! Claim assembler and host boundary for zkVM guest finalization.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `Output`, `ExitCode`, `build_output_claim`
//! - **Ports Layer** (`ports/`): `HostBoundary` (write output, finalize)
//! - **Finalizer** (`finalizer`): once-only write → finalize pipeline
//! - **Adapters Layer** (`adapters/`): `RecordingHost`
//!
//! ## Flow
//!
//! ```text
//! journal bytes ──pad+compress──→ journal digest
//!                                      │
//!            assumptions digest ──────→ tagged_struct("risc0.Output") ──→ host.finalize
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use zg_02_claim::{finalize_guest, ExitCode, RecordingHost, NO_ASSUMPTIONS};
//!
//! let mut host = RecordingHost::new();
//! let finalized = finalize_guest(&mut host, b"hello", ExitCode::HALTED, NO_ASSUMPTIONS);
//! assert_eq!(host.claim(), Some(finalized.claim));
//! ```

#![warn(missing_docs)]

pub mod adapters;
pub mod domain;
pub mod finalizer;
pub mod ports;

pub use adapters::{HostRecord, RecordingHost};
pub use domain::{build_output_claim, ExitCode, Output, NO_ASSUMPTIONS, OUTPUT_TAG};
pub use finalizer::{finalize_guest, FinalizedClaim, GuestFinalizer, JournalCommitted};
pub use ports::HostBoundary;
