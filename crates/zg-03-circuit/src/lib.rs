//! # ZG-03 Circuit
//!
//! Circuit-breaker keeper: decides which state-machine message types may
//! execute and who may change that.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): permissions, messages, genesis
//! - **Ports Layer** (`ports/`): `CircuitStore`, `AddressCodec`
//! - **Service Layer** (`service/`): `CircuitKeeper`
//! - **Adapters Layer** (`adapters/`): `InMemoryCircuitStore`, `HexAddressCodec`
//!
//! ## Errors
//!
//! - `NotFound` - no permission record, only raised where one is required
//! - `Unauthorized` - permission check failed
//! - `InvalidRequest` - malformed grant
//! - `AddressDecode` / `Store` - passed through from the ports
//!
//! ## Usage Example
//!
//! ```
//! use zg_03_circuit::{
//!     CircuitConfig, CircuitKeeper, HexAddressCodec, InMemoryCircuitStore,
//!     MsgTripCircuitBreaker,
//! };
//!
//! let config = CircuitConfig::default();
//! let keeper = CircuitKeeper::new(InMemoryCircuitStore::new(), HexAddressCodec::default(), &config)?;
//!
//! keeper.trip_circuit_breaker(&MsgTripCircuitBreaker {
//!     authority: config.authority.clone(),
//!     msg_type_urls: vec!["/cosmos.bank.v1beta1.MsgSend".to_string()],
//! })?;
//! assert!(!keeper.is_allowed("/cosmos.bank.v1beta1.MsgSend")?);
//! # Ok::<(), zg_03_circuit::CircuitError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{HexAddressCodec, InMemoryCircuitStore};
pub use config::CircuitConfig;
pub use domain::{
    module_address, Address, CircuitMsg, CircuitResponse, GenesisAccountPermissions, GenesisState,
    MsgAuthorizeCircuitBreaker, MsgAuthorizeCircuitBreakerResponse, MsgResetCircuitBreaker,
    MsgResetCircuitBreakerResponse, MsgTripCircuitBreaker, MsgTripCircuitBreakerResponse,
    PermissionLevel, Permissions,
};
pub use error::CircuitError;
pub use ports::{AddressCodec, CircuitStore};
pub use service::CircuitKeeper;
