//! # Alignment & Padding Engine
//!
//! Turns an arbitrary byte buffer into a block-aligned buffer ready for the
//! compression driver.
//!
//! ## Layout
//!
//! ```text
//! | data ... | 0x80 | 0x00 ... 0x00 | 0x00000000 | bit length (BE u32) |
//!                                    ^ high trailer word, always zero
//! ```
//!
//! Two trailer words are reserved but only the low one is written: bit
//! lengths are 32-bit. Inputs whose bit length does not fit abort.

/// Bytes per word.
pub const WORD_SIZE: usize = 4;

/// Words per compression block.
pub const BLOCK_WORDS: usize = 16;

/// Bytes per compression block.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * WORD_SIZE;

/// End-of-data marker byte.
pub const END_MARKER: u8 = 0x80;

/// Largest input whose bit length fits the 32-bit trailer.
pub const MAX_MESSAGE_BYTES: usize = (u32::MAX / 8) as usize;

/// Round `value` up to a multiple of `alignment` (a power of two).
pub const fn align_up(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}

/// Words required to pad a `len`-byte input.
///
/// One byte for the end marker, two words of length trailer, rounded up to
/// a whole block.
pub const fn padded_word_count(len: usize) -> usize {
    let words = align_up(len + 1, WORD_SIZE) / WORD_SIZE + 2;
    align_up(words, BLOCK_WORDS)
}

/// Bit length of a `len`-byte input as the 32-bit trailer value.
///
/// # Panics
///
/// If `len > MAX_MESSAGE_BYTES`.
pub fn bit_length_trailer(len: usize) -> u32 {
    (len as u64)
        .checked_mul(8)
        .and_then(|bits| u32::try_from(bits).ok())
        .unwrap_or_else(|| {
            panic!(
                "message of {len} bytes exceeds the 32-bit length trailer \
                 ({MAX_MESSAGE_BYTES} bytes max)"
            )
        })
}

/// A byte buffer whose length is a whole number of compression blocks.
#[derive(Clone, PartialEq, Eq)]
pub struct PaddedBuffer {
    bytes: Vec<u8>,
}

impl PaddedBuffer {
    /// Padded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes. Always a multiple of [`BLOCK_BYTES`].
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true: padding always yields at least one block.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of compression blocks.
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_BYTES
    }

    /// Iterate over consecutive 64-byte blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.bytes.chunks_exact(BLOCK_BYTES)
    }

    /// Big-endian value of the final word.
    pub fn trailer(&self) -> u32 {
        let n = self.bytes.len();
        u32::from_be_bytes([
            self.bytes[n - 4],
            self.bytes[n - 3],
            self.bytes[n - 2],
            self.bytes[n - 1],
        ])
    }
}

impl std::fmt::Debug for PaddedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaddedBuffer")
            .field("blocks", &self.block_count())
            .field("bit_length", &self.trailer())
            .finish()
    }
}

/// Pad `bytes` for block compression.
///
/// # Panics
///
/// If the computed buffer cannot hold the data and marker (an internal sizing
/// bug), or if the input exceeds [`MAX_MESSAGE_BYTES`].
pub fn pad(bytes: &[u8]) -> PaddedBuffer {
    let bit_len = bit_length_trailer(bytes.len());
    let words = padded_word_count(bytes.len());
    let mut buf = vec![0u8; words * WORD_SIZE];

    assert!(
        bytes.len() + 1 + 2 * WORD_SIZE <= buf.len(),
        "padded buffer of {} bytes cannot hold {} data bytes",
        buf.len(),
        bytes.len()
    );

    buf[..bytes.len()].copy_from_slice(bytes);
    buf[bytes.len()] = END_MARKER;

    let n = buf.len();
    buf[n - WORD_SIZE..].copy_from_slice(&bit_len.to_be_bytes());

    PaddedBuffer { bytes: buf }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_up(1, 4), 4);
        assert_eq!(align_up(4, 4), 4);
        assert_eq!(align_up(17, 16), 32);
    }

    #[test]
    fn test_word_count_block_boundaries() {
        assert_eq!(padded_word_count(0), 16);
        assert_eq!(padded_word_count(55), 16);
        // 56 bytes + marker + two trailer words spills into a second block
        assert_eq!(padded_word_count(56), 32);
        assert_eq!(padded_word_count(64), 32);
        assert_eq!(padded_word_count(119), 32);
        assert_eq!(padded_word_count(120), 48);
    }

    #[test]
    fn test_empty_input() {
        let padded = pad(&[]);
        assert_eq!(padded.len(), 64);
        assert_eq!(padded.as_bytes()[0], END_MARKER);
        assert!(padded.as_bytes()[1..].iter().all(|b| *b == 0));
        assert_eq!(padded.trailer(), 0);
    }

    #[test]
    fn test_layout() {
        let padded = pad(&[0, 1, 2, 3]);
        let bytes = padded.as_bytes();
        assert_eq!(&bytes[..4], &[0, 1, 2, 3]);
        assert_eq!(bytes[4], 0x80);
        assert!(bytes[5..60].iter().all(|b| *b == 0));
        assert_eq!(&bytes[60..], &[0, 0, 0, 32]);
        assert_eq!(padded.block_count(), 1);
    }

    #[test]
    fn test_full_block_input() {
        let data = [0xAAu8; 64];
        let padded = pad(&data);
        assert_eq!(padded.block_count(), 2);
        assert_eq!(padded.as_bytes()[64], END_MARKER);
        assert_eq!(padded.trailer(), 512);
    }

    #[test]
    fn test_trailer_limit() {
        assert_eq!(bit_length_trailer(MAX_MESSAGE_BYTES), u32::MAX - 7);
    }

    #[test]
    #[should_panic(expected = "32-bit length trailer")]
    fn test_trailer_overflow_aborts() {
        bit_length_trailer(MAX_MESSAGE_BYTES + 1);
    }
}
