use crate::domain::{Address, Permissions};
use crate::error::CircuitError;
use crate::ports::CircuitStore;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

/// In-memory implementation of CircuitStore
///
/// Ordered maps keep listing and genesis export deterministic.
pub struct InMemoryCircuitStore {
    permissions: RwLock<BTreeMap<Address, Permissions>>,
    disabled: RwLock<BTreeSet<String>>,
}

impl InMemoryCircuitStore {
    pub fn new() -> Self {
        Self {
            permissions: RwLock::new(BTreeMap::new()),
            disabled: RwLock::new(BTreeSet::new()),
        }
    }
}

impl Default for InMemoryCircuitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitStore for InMemoryCircuitStore {
    fn get_permissions(&self, address: &[u8]) -> Result<Option<Permissions>, CircuitError> {
        let permissions = self
            .permissions
            .read()
            .map_err(|_| CircuitError::LockPoisoned)?;
        Ok(permissions.get(address).cloned())
    }

    fn set_permissions(
        &self,
        address: &[u8],
        grant: Permissions,
    ) -> Result<(), CircuitError> {
        let mut permissions = self
            .permissions
            .write()
            .map_err(|_| CircuitError::LockPoisoned)?;
        permissions.insert(address.to_vec(), grant);
        Ok(())
    }

    fn list_permissions(&self) -> Result<Vec<(Address, Permissions)>, CircuitError> {
        let permissions = self
            .permissions
            .read()
            .map_err(|_| CircuitError::LockPoisoned)?;
        Ok(permissions
            .iter()
            .map(|(address, grant)| (address.clone(), grant.clone()))
            .collect())
    }

    fn is_disabled(&self, msg_type_url: &str) -> Result<bool, CircuitError> {
        let disabled = self
            .disabled
            .read()
            .map_err(|_| CircuitError::LockPoisoned)?;
        Ok(disabled.contains(msg_type_url))
    }

    fn disable(&self, msg_type_url: &str) -> Result<(), CircuitError> {
        let mut disabled = self
            .disabled
            .write()
            .map_err(|_| CircuitError::LockPoisoned)?;
        disabled.insert(msg_type_url.to_string());
        Ok(())
    }

    fn enable(&self, msg_type_url: &str) -> Result<(), CircuitError> {
        let mut disabled = self
            .disabled
            .write()
            .map_err(|_| CircuitError::LockPoisoned)?;
        disabled.remove(msg_type_url);
        Ok(())
    }

    fn list_disabled(&self) -> Result<Vec<String>, CircuitError> {
        let disabled = self
            .disabled
            .read()
            .map_err(|_| CircuitError::LockPoisoned)?;
        Ok(disabled.iter().cloned().collect())
    }
}
