//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Permission levels and grants
//! - Circuit-breaker messages and responses
//! - Genesis state
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod genesis;
pub mod messages;
pub mod permissions;

pub use genesis::{GenesisAccountPermissions, GenesisState};
pub use messages::{
    CircuitMsg, CircuitResponse, MsgAuthorizeCircuitBreaker, MsgAuthorizeCircuitBreakerResponse,
    MsgResetCircuitBreaker, MsgResetCircuitBreakerResponse, MsgTripCircuitBreaker,
    MsgTripCircuitBreakerResponse,
};
pub use permissions::{module_address, Address, PermissionLevel, Permissions};
