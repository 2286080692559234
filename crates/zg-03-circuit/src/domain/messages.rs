//! Circuit-breaker messages
//!
//! Addresses travel as strings and are decoded by the keeper's
//! [`crate::ports::AddressCodec`].

use serde::{Deserialize, Serialize};

use super::permissions::Permissions;

/// Grant (or overwrite) an account's permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAuthorizeCircuitBreaker {
    /// Account granting; must be a super admin or the authority.
    pub granter: String,
    /// Account receiving the grant.
    pub grantee: String,
    /// The grant. `LEVEL_NONE_UNSPECIFIED` revokes.
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

/// Response to [`MsgAuthorizeCircuitBreaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAuthorizeCircuitBreakerResponse {
    pub success: bool,
}

/// Stop processing the listed message types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTripCircuitBreaker {
    /// Account tripping the breaker.
    pub authority: String,
    /// Type URLs to disable.
    #[serde(default)]
    pub msg_type_urls: Vec<String>,
}

/// Response to [`MsgTripCircuitBreaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgTripCircuitBreakerResponse {
    pub success: bool,
}

/// Resume processing of the listed message types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgResetCircuitBreaker {
    /// Account resetting the breaker.
    pub authority: String,
    /// Type URLs to re-enable.
    #[serde(default)]
    pub msg_type_urls: Vec<String>,
}

/// Response to [`MsgResetCircuitBreaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgResetCircuitBreakerResponse {
    pub success: bool,
}

/// Any circuit-breaker message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CircuitMsg {
    Authorize(MsgAuthorizeCircuitBreaker),
    Trip(MsgTripCircuitBreaker),
    Reset(MsgResetCircuitBreaker),
}

impl CircuitMsg {
    pub const AUTHORIZE_TYPE_URL: &'static str = "/cosmos.circuit.v1.MsgAuthorizeCircuitBreaker";
    pub const TRIP_TYPE_URL: &'static str = "/cosmos.circuit.v1.MsgTripCircuitBreaker";
    pub const RESET_TYPE_URL: &'static str = "/cosmos.circuit.v1.MsgResetCircuitBreaker";

    /// Type URL of this message.
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Authorize(_) => Self::AUTHORIZE_TYPE_URL,
            Self::Trip(_) => Self::TRIP_TYPE_URL,
            Self::Reset(_) => Self::RESET_TYPE_URL,
        }
    }

    /// Address string of the signer.
    pub fn signer(&self) -> &str {
        match self {
            Self::Authorize(msg) => &msg.granter,
            Self::Trip(msg) => &msg.authority,
            Self::Reset(msg) => &msg.authority,
        }
    }
}

/// Response of an executed [`CircuitMsg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CircuitResponse {
    Authorize(MsgAuthorizeCircuitBreakerResponse),
    Trip(MsgTripCircuitBreakerResponse),
    Reset(MsgResetCircuitBreakerResponse),
}

impl CircuitResponse {
    pub fn success(&self) -> bool {
        match self {
            Self::Authorize(r) => r.success,
            Self::Trip(r) => r.success,
            Self::Reset(r) => r.success,
        }
    }
}
