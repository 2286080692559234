//! Guest runtime entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use guest_runtime::{run_block, BlockInput, StdoutHost};
use zg_03_circuit::CircuitConfig;
use zg_telemetry::{init_logging, TelemetryConfig};

/// Guest runtime: executes a block of circuit-breaker messages and finalizes its claim
#[derive(Parser, Debug)]
#[command(name = "guest-runtime")]
#[command(about = "Execute a block of circuit-breaker messages and print the journal and claim")]
struct Args {
    /// JSON block input (genesis + messages)
    #[arg(short, long)]
    input: PathBuf,

    /// Authority address, bypasses all permission checks
    #[arg(short, long, env = "ZG_AUTHORITY")]
    authority: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let mut config = CircuitConfig::from_env();
    if let Some(authority) = args.authority {
        config = config.with_authority(authority);
    }
    config.validate().context("Invalid circuit configuration")?;

    let input = BlockInput::load(&args.input)?;
    info!(path = %args.input.display(), messages = input.messages.len(), "Block loaded");

    let mut host = StdoutHost::new();
    run_block(&input, &config, &mut host)?;
    host.finish().context("Failed to write output")?;

    Ok(())
}
