//! Keeper configuration
//!
//! # Example
//!
//! ```
//! use zg_03_circuit::CircuitConfig;
//!
//! let config = CircuitConfig::default().with_authority("0x0101010101010101010101010101010101010101");
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::env;

use crate::adapters::hex_codec::DEFAULT_ADDRESS_LEN;
use crate::domain::module_address;
use crate::error::CircuitError;

/// Largest supported address length in bytes.
pub const MAX_ADDRESS_LEN: usize = 64;

/// Circuit-breaker keeper configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitConfig {
    /// Address string of the module authority. Bypasses all permission checks.
    pub authority: String,
    /// Address length in bytes.
    pub address_len: usize,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            // governance module account
            authority: format!("0x{}", hex::encode(module_address("gov"))),
            address_len: DEFAULT_ADDRESS_LEN,
        }
    }
}

impl CircuitConfig {
    /// Configuration from environment variables.
    ///
    /// - `ZG_AUTHORITY`: authority address (default: governance module account)
    /// - `ZG_ADDRESS_LEN`: address length in bytes (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            authority: env::var("ZG_AUTHORITY").unwrap_or(defaults.authority),
            address_len: env::var("ZG_ADDRESS_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.address_len),
        }
    }

    /// Validate lengths and the authority string shape.
    pub fn validate(&self) -> Result<(), CircuitError> {
        if self.address_len == 0 || self.address_len > MAX_ADDRESS_LEN {
            return Err(CircuitError::InvalidConfig(format!(
                "address_len must be between 1 and {MAX_ADDRESS_LEN}, got {}",
                self.address_len
            )));
        }

        if self.authority.trim().is_empty() {
            return Err(CircuitError::InvalidConfig(
                "authority cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set the authority
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    /// Builder-style method to set the address length
    pub fn with_address_len(mut self, len: usize) -> Self {
        self.address_len = len;
        self
    }
}
