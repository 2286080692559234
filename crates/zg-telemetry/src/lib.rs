//! # ZG Telemetry
//!
//! Structured logging for the guest runtime and its libraries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zg_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ZG_SERVICE_NAME` | `zk-guest` | Service name in log lines |
//! | `ZG_LOG_LEVEL` / `RUST_LOG` | `info` | Level or `EnvFilter` directive |
//! | `ZG_JSON_LOGS` | `false` | JSON instead of pretty output |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The configuration could not be turned into a filter.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
