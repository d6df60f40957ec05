//! Tracing setup for the airprop CLI
//!
//! Usage:
//!   airprop --debug serve             # Debug logging to console
//!   RUST_LOG=airprop=debug airprop    # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing. `RUST_LOG` wins over the debug flag.
pub fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
