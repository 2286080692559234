//! Ports Layer
//!
//! Driven ports the finalization pipeline depends on.

pub mod host;

pub use host::HostBoundary;
