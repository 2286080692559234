//! # ZK Guest Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Padding and compression throughput
//! └── src/integration/  # Cross-crate flows
//!     ├── finalization.rs   # digest → claim → host boundary
//!     └── runtime_flows.rs  # genesis → block → journal → claim
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p zg-tests
//! cargo test -p zg-tests integration::finalization
//! cargo bench -p zg-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
