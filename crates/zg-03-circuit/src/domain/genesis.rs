//! Genesis state of the circuit-breaker keeper.

use serde::{Deserialize, Serialize};

use super::permissions::Permissions;

/// One account's grant at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccountPermissions {
    /// Account address string.
    pub address: String,
    /// The grant.
    pub permissions: Permissions,
}

/// Keeper state loaded at genesis and exported on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    /// Account grants.
    #[serde(default)]
    pub account_permissions: Vec<GenesisAccountPermissions>,
    /// Type URLs disabled at genesis.
    #[serde(default)]
    pub disabled_type_urls: Vec<String>,
}
