//! The genesis preparation pipeline.

use anyhow::{Context, Result};
use chrono::Utc;
use genesis_core::{
    Account, DefaultGenesisBuilder, GenesisAssembler, GenesisDoc, GenesisParams, GenesisState,
    GenesisValidator, JsonTxDecoder,
};
use tracing::{info, warn};

use crate::files;
use crate::RuntimeConfig;

/// A state the node may launch from.
#[derive(Debug)]
pub struct PreparedGenesis {
    /// The document the state was assembled from, `app_state` updated.
    pub doc: GenesisDoc,
    pub state: GenesisState,
    pub accounts: Vec<Account>,
}

/// Load, assemble and validate the genesis state described by `config`.
pub fn prepare_genesis(config: &RuntimeConfig) -> Result<PreparedGenesis> {
    let mut doc = match &config.genesis_file {
        Some(path) => {
            if config.params_file.is_some() {
                warn!("Genesis file given, ignoring parameter overrides");
            }
            files::load_genesis_doc(path)?
        }
        None => default_doc(config)?,
    };

    let batch = files::collect_gentxs(&config.gentx_dir)?;

    let state = GenesisAssembler::new(JsonTxDecoder).assemble(&doc, batch)?;

    let accounts = GenesisValidator::default().validate_and_normalize(&state)?;

    doc.app_state = state
        .to_json()
        .context("failed to serialize assembled app state")?;

    if let Some(path) = &config.output_file {
        files::write_genesis_doc(path, &doc)?;
    }

    info!(
        chain_id = %doc.chain_id,
        accounts = accounts.len(),
        gentxs = state.gentxs.len(),
        "Genesis ready"
    );
    Ok(PreparedGenesis {
        doc,
        state,
        accounts,
    })
}

fn default_doc(config: &RuntimeConfig) -> Result<GenesisDoc> {
    let params = match &config.params_file {
        Some(path) => files::load_params(path)?,
        None => GenesisParams::default(),
    };

    info!(chain_id = %config.chain_id, "No genesis file given, using default state");
    let state = DefaultGenesisBuilder::new(params).build();
    GenesisDoc::new(config.chain_id.clone(), Utc::now(), &state)
        .context("failed to serialize default app state")
}
