//! Adapters Layer
//!
//! Host boundary implementations.

pub mod recording_host;

pub use recording_host::{HostRecord, RecordingHost};
