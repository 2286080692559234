//! Error types for the circuit-breaker keeper

use thiserror::Error;

/// Errors that can occur in the circuit-breaker keeper
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("Permissions not found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Message {0} is already disabled")]
    AlreadyDisabled(String),

    #[error("Message {0} is not disabled")]
    NotDisabled(String),

    #[error("Message {0} is disabled by the circuit breaker")]
    MessageDisabled(String),

    #[error("Invalid address: {0}")]
    AddressDecode(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
