//! # Digest
//!
//! Eight 32-bit words holding a SHA-256 state or result.
//!
//! Words follow the memory convention of the zkVM compression primitive:
//! serializing each word little-endian, in order, yields the standard
//! big-endian SHA-256 byte output. The same convention applies to the IV
//! table below, which is why its values look byte-swapped next to FIPS 180-4.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DigestError;

/// Number of words in a digest.
pub const DIGEST_WORDS: usize = 8;

/// Number of bytes in a digest.
pub const DIGEST_BYTES: usize = DIGEST_WORDS * 4;

/// SHA-256 initial hash state, in digest word convention.
pub const SHA256_IV: Digest = Digest::new([
    0x67e6_096a,
    0x85ae_67bb,
    0x72f3_6e3c,
    0x3af5_4fa5,
    0x7f52_0e51,
    0x8c68_059b,
    0xabd9_831f,
    0x19cd_e05b,
]);

/// A 256-bit hash state or result.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u32; DIGEST_WORDS]);

impl Digest {
    /// The all-zero digest.
    pub const ZERO: Digest = Digest([0; DIGEST_WORDS]);

    /// Wrap raw words.
    pub const fn new(words: [u32; DIGEST_WORDS]) -> Self {
        Self(words)
    }

    /// Raw words.
    pub const fn as_words(&self) -> &[u32; DIGEST_WORDS] {
        &self.0
    }

    /// Serialize as 32 bytes, each word little-endian.
    pub fn to_bytes(&self) -> [u8; DIGEST_BYTES] {
        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Inverse of [`Digest::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DigestError> {
        if bytes.len() != DIGEST_BYTES {
            return Err(DigestError::InvalidLength {
                expected: DIGEST_BYTES,
                actual: bytes.len(),
            });
        }
        let mut words = [0u32; DIGEST_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Self(words))
    }

    /// Lowercase hex of [`Digest::to_bytes`].
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Load into the big-endian state words the FIPS compression function expects.
    pub(crate) fn to_state(self) -> [u32; DIGEST_WORDS] {
        self.0.map(|word| u32::from_be_bytes(word.to_le_bytes()))
    }

    /// Store FIPS state words back into digest convention.
    pub(crate) fn from_state(state: [u32; DIGEST_WORDS]) -> Self {
        Self(state.map(|word| u32::from_le_bytes(word.to_be_bytes())))
    }
}

impl From<[u32; DIGEST_WORDS]> for Digest {
    fn from(words: [u32; DIGEST_WORDS]) -> Self {
        Self(words)
    }
}

impl From<Digest> for [u32; DIGEST_WORDS] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| DigestError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
