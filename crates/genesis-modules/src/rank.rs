//! # Rank
//!
//! Reputation ranking over the knowledge graph. Ranks are recomputed every
//! `calculation_period` blocks by power iteration until the change falls
//! under `tolerance`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ratio::is_open_fraction;

pub const MODULE_NAME: &str = "rank";

/// Rank validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("rank parameter calculation_period must be positive")]
    ZeroCalculationPeriod,

    #[error("rank parameter damping_factor must be within (0, 1), got {0}")]
    DampingFactorOutOfRange(Decimal),

    #[error("rank parameter tolerance must be within (0, 1), got {0}")]
    ToleranceOutOfRange(Decimal),
}

/// Rank parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Blocks between rank recalculations.
    pub calculation_period: u64,
    pub damping_factor: Decimal,
    pub tolerance: Decimal,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            calculation_period: 5,
            damping_factor: Decimal::new(85, 2),
            tolerance: Decimal::new(1, 3),
        }
    }
}

/// Rank genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
}

/// Validate the rank sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), RankError> {
    let params = &state.params;

    if params.calculation_period == 0 {
        return Err(RankError::ZeroCalculationPeriod);
    }
    if !is_open_fraction(params.damping_factor) {
        return Err(RankError::DampingFactorOutOfRange(params.damping_factor));
    }
    if !is_open_fraction(params.tolerance) {
        return Err(RankError::ToleranceOutOfRange(params.tolerance));
    }
    Ok(())
}
