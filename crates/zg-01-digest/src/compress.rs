//! # Compression Driver
//!
//! Folds a padded buffer through the SHA-256 compression function.
//!
//! The driver never pads: input comes from [`crate::padding::pad`] already
//! block-aligned. `sha2::compress256` runs the bare compression function;
//! the streaming `Sha256` hasher would append its own padding.

use sha2::digest::generic_array::GenericArray;
use tracing::trace;

use crate::digest::{Digest, SHA256_IV};
use crate::padding::{pad, PaddedBuffer};

/// Compression primitive operating on pre-padded blocks.
///
/// Inside the zkVM this is the accelerated SHA syscall; on the host it is
/// the software compression function.
pub trait BlockCompressor {
    /// Compress every block of `buffer` in order, starting from `state`.
    fn compress(&self, state: &Digest, buffer: &PaddedBuffer) -> Digest;
}

/// Software SHA-256 compression.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Compressor;

impl BlockCompressor for Sha256Compressor {
    fn compress(&self, state: &Digest, buffer: &PaddedBuffer) -> Digest {
        let mut words = state.to_state();
        for block in buffer.blocks() {
            let block = GenericArray::from_slice(block);
            sha2::compress256(&mut words, std::slice::from_ref(block));
        }
        trace!(blocks = buffer.block_count(), "Compressed padded buffer");
        Digest::from_state(words)
    }
}

/// Hash `bytes` with `compressor`: pad, then compress from the IV.
pub fn hash_bytes_with<C: BlockCompressor + ?Sized>(compressor: &C, bytes: &[u8]) -> Digest {
    compressor.compress(&SHA256_IV, &pad(bytes))
}

/// Hash `bytes` with the software compressor.
pub fn hash_bytes(bytes: &[u8]) -> Digest {
    hash_bytes_with(&Sha256Compressor, bytes)
}
