//! Address codec (Driven Port)

use crate::domain::Address;
use crate::error::CircuitError;

/// Converts between address strings carried in messages and raw bytes.
pub trait AddressCodec: Send + Sync {
    /// Decode an address string. Fails with `CircuitError::AddressDecode`.
    fn string_to_bytes(&self, text: &str) -> Result<Address, CircuitError>;

    /// Encode raw address bytes.
    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, CircuitError>;
}
