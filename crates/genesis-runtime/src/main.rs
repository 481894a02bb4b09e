//! # Genesis Runtime
//!
//! Prepares and checks the genesis state before the node starts consensus.
//! Configuration comes from the environment only; see [`RuntimeConfig`].

use anyhow::Result;
use tracing::{error, info};

use genesis_runtime::logging::init_logging;
use genesis_runtime::{prepare_genesis, RuntimeConfig};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    init_logging(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        gentx_dir = %config.gentx_dir.display(),
        "Starting genesis preparation"
    );

    let prepared = prepare_genesis(&config).inspect_err(|e| {
        error!(error = %format!("{:#}", e), "Genesis preparation failed, refusing to start");
    })?;

    info!(
        chain_id = %prepared.doc.chain_id,
        validators = prepared.state.gentxs.len(),
        "Genesis state valid, node may launch"
    );
    Ok(())
}
