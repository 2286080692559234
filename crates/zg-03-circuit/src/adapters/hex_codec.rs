//! Hex address codec.
//!
//! Addresses are `0x`-prefixed (prefix optional on input) lowercase hex of a
//! fixed byte length.

use crate::domain::Address;
use crate::error::CircuitError;
use crate::ports::AddressCodec;

/// Default address length in bytes.
pub const DEFAULT_ADDRESS_LEN: usize = 20;

/// Fixed-length hex address codec.
#[derive(Debug, Clone, Copy)]
pub struct HexAddressCodec {
    len: usize,
}

impl HexAddressCodec {
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for HexAddressCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_LEN)
    }
}

impl AddressCodec for HexAddressCodec {
    fn string_to_bytes(&self, text: &str) -> Result<Address, CircuitError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CircuitError::AddressDecode(
                "empty address string is not allowed".to_string(),
            ));
        }

        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(digits)
            .map_err(|e| CircuitError::AddressDecode(format!("{text}: {e}")))?;

        if bytes.len() != self.len {
            return Err(CircuitError::AddressDecode(format!(
                "{text}: expected {} bytes, got {}",
                self.len,
                bytes.len()
            )));
        }
        Ok(bytes)
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, CircuitError> {
        if bytes.len() != self.len {
            return Err(CircuitError::AddressDecode(format!(
                "expected {} bytes, got {}",
                self.len,
                bytes.len()
            )));
        }
        Ok(format!("0x{}", hex::encode(bytes)))
    }
}
