//! # Tagged-Struct Digest
//!
//! Domain-separated hash over an ordered list of sub-digests:
//!
//! ```text
//! tagged_struct(tag, [d_1 .. d_n]) =
//!     H( H(tag) || d_1 || ... || d_n || n as u16 LE )
//! ```
//!
//! Every digest is serialized as its eight words little-endian. The trailing
//! count keeps one two-element list distinct from any concatenation of
//! shorter lists. Trailing non-digest data is not supported.

use tracing::trace;

use crate::compress::{hash_bytes_with, BlockCompressor, Sha256Compressor};
use crate::digest::{Digest, DIGEST_BYTES};

/// Tagged-struct digest with the software compressor.
///
/// # Panics
///
/// If `digests` holds more than `u16::MAX` entries.
pub fn tagged_struct(tag: &str, digests: &[Digest]) -> Digest {
    tagged_struct_with(&Sha256Compressor, tag, digests)
}

/// Tagged-struct digest with an explicit compressor.
///
/// # Panics
///
/// If `digests` holds more than `u16::MAX` entries.
pub fn tagged_struct_with<C: BlockCompressor + ?Sized>(
    compressor: &C,
    tag: &str,
    digests: &[Digest],
) -> Digest {
    let count = u16::try_from(digests.len()).unwrap_or_else(|_| {
        panic!(
            "tagged struct {tag:?} has {} digests, at most {} are encodable",
            digests.len(),
            u16::MAX
        )
    });

    let tag_digest = hash_bytes_with(compressor, tag.as_bytes());

    let mut buf = Vec::with_capacity(DIGEST_BYTES * (digests.len() + 1) + 2);
    buf.extend_from_slice(&tag_digest.to_bytes());
    for digest in digests {
        buf.extend_from_slice(&digest.to_bytes());
    }
    buf.extend_from_slice(&count.to_le_bytes());

    trace!(tag, count, "Hashing tagged struct");
    hash_bytes_with(compressor, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::hash_bytes;

    #[test]
    fn test_empty_list_encodes_zero_count() {
        let expected: Digest = "c658bf6bf5d7b436852a5091d2b9d171b3af394351b15f034125fed3bc7148c4"
            .parse()
            .unwrap();
        assert_eq!(tagged_struct("risc0.Output", &[]), expected);

        let mut manual = hash_bytes(b"risc0.Output").to_bytes().to_vec();
        manual.extend_from_slice(&[0, 0]);
        assert_eq!(hash_bytes(&manual), expected);
    }

    #[test]
    fn test_order_sensitive() {
        let a = hash_bytes(b"a");
        let b = hash_bytes(b"b");
        assert_ne!(tagged_struct("t", &[a, b]), tagged_struct("t", &[b, a]));
    }

    #[test]
    fn test_tag_separates_domains() {
        let a = hash_bytes(b"a");
        assert_ne!(tagged_struct("one", &[a]), tagged_struct("two", &[a]));
    }

    #[test]
    fn test_count_disambiguates_lengths() {
        let a = hash_bytes(b"a");
        let pair = tagged_struct("t", &[a, a]);
        let single = tagged_struct("t", &[a]);
        let nested = tagged_struct("t", &[single]);
        assert_ne!(pair, single);
        assert_ne!(pair, nested);
    }
}
