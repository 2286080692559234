//! Circuit store (Driven Port)
//!
//! Two collections: account permissions keyed by address bytes, and the set
//! of disabled message type URLs. Absence of a permission record is not an
//! error at this layer; callers decide whether it is required.

use crate::domain::{Address, Permissions};
use crate::error::CircuitError;

/// Persistent keeper state.
pub trait CircuitStore: Send + Sync {
    /// Permissions of `address`, if any were granted.
    fn get_permissions(&self, address: &[u8]) -> Result<Option<Permissions>, CircuitError>;

    /// Overwrite the permissions of `address`.
    fn set_permissions(&self, address: &[u8], permissions: Permissions)
        -> Result<(), CircuitError>;

    /// All grants, ordered by address.
    fn list_permissions(&self) -> Result<Vec<(Address, Permissions)>, CircuitError>;

    /// Whether `msg_type_url` is in the disabled set.
    fn is_disabled(&self, msg_type_url: &str) -> Result<bool, CircuitError>;

    /// Add `msg_type_url` to the disabled set.
    fn disable(&self, msg_type_url: &str) -> Result<(), CircuitError>;

    /// Remove `msg_type_url` from the disabled set.
    fn enable(&self, msg_type_url: &str) -> Result<(), CircuitError>;

    /// Disabled type URLs, sorted.
    fn list_disabled(&self) -> Result<Vec<String>, CircuitError>;
}
