//! # Supply
//!
//! Total token supply across all accounts.

use serde::{Deserialize, Serialize};
use shared_types::{CoinError, Coins};
use thiserror::Error;

pub const MODULE_NAME: &str = "supply";

/// Supply validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupplyError {
    #[error("invalid total supply: {0}")]
    InvalidSupply(#[source] CoinError),
}

/// Supply genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub supply: Coins,
}

/// Validate the supply sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), SupplyError> {
    state.supply.validate().map_err(SupplyError::InvalidSupply)
}
