//! # ZG-01 Digest
//!
//! Bit-exact SHA-256 commitment pipeline for zkVM guests.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | `digest` | `Digest` word array and the IV table |
//! | `padding` | Alignment & padding engine |
//! | `compress` | Compression driver over pre-padded blocks |
//! | `tagged` | Domain-separated tagged-struct digests |
//!
//! ## Invariants
//!
//! - Padded buffers are a whole number of 64-byte blocks
//! - Exactly one `0x80` marker follows the data
//! - The trailer holds the unpadded bit length (32-bit only)
//! - Tagged-struct digests depend on the order of their inputs
//!
//! ## Usage
//!
//! ```rust
//! use zg_01_digest::{hash_bytes, tagged_struct, Digest};
//!
//! let journal = hash_bytes(b"");
//! let claim = tagged_struct("risc0.Output", &[journal, Digest::ZERO]);
//! assert_ne!(claim, journal);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compress;
pub mod digest;
pub mod errors;
pub mod padding;
pub mod tagged;

// Re-exports
pub use compress::{hash_bytes, hash_bytes_with, BlockCompressor, Sha256Compressor};
pub use digest::{Digest, DIGEST_BYTES, DIGEST_WORDS, SHA256_IV};
pub use errors::DigestError;
pub use padding::{pad, PaddedBuffer, BLOCK_BYTES, MAX_MESSAGE_BYTES};
pub use tagged::{tagged_struct, tagged_struct_with};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
