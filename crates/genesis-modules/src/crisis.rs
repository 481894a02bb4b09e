//! # Crisis
//!
//! Anyone may ask the chain to re-check its invariants by paying a constant
//! fee. A broken invariant halts the chain.

use serde::{Deserialize, Serialize};
use shared_types::{Coin, CoinError};
use thiserror::Error;

pub const MODULE_NAME: &str = "crisis";

/// Crisis validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrisisError {
    #[error("constant fee {fee} is invalid: {source}")]
    InvalidConstantFee {
        fee: String,
        #[source]
        source: CoinError,
    },
}

/// Crisis genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub constant_fee: Coin,
}

impl Default for GenesisState {
    fn default() -> Self {
        Self {
            constant_fee: Coin::new("stake", 1000u64),
        }
    }
}

/// Validate the crisis sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), CrisisError> {
    state
        .constant_fee
        .validate_positive()
        .map_err(|source| CrisisError::InvalidConstantFee {
            fee: state.constant_fee.to_string(),
            source,
        })
}
