//! # Mint
//!
//! Inflation schedule. Each block the minter moves inflation toward the
//! bonded-ratio goal by at most `inflation_rate_change` per year, clamped to
//! `[inflation_min, inflation_max]`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{validate_denom, CoinError};
use thiserror::Error;

use crate::ratio::is_positive_fraction;

pub const MODULE_NAME: &str = "mint";

/// Mint validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    #[error("invalid mint denom: {0}")]
    InvalidMintDenom(#[source] CoinError),

    #[error("mint parameter inflation_min must be non-negative, got {0}")]
    NegativeInflationMin(Decimal),

    #[error("mint parameter inflation_max ({max}) must be greater than or equal to inflation_min ({min})")]
    InflationBounds { min: Decimal, max: Decimal },

    #[error("mint parameter inflation_rate_change must be non-negative, got {0}")]
    NegativeRateChange(Decimal),

    #[error("mint parameter goal_bonded must be within (0, 1], got {0}")]
    GoalBondedOutOfRange(Decimal),

    #[error("mint parameter blocks_per_year must be positive")]
    ZeroBlocksPerYear,

    #[error("minter inflation must be non-negative, got {0}")]
    NegativeInflation(Decimal),

    #[error("minter annual provisions must be non-negative, got {0}")]
    NegativeAnnualProvisions(Decimal),
}

/// Current minting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minter {
    /// Current annual inflation rate.
    pub inflation: Decimal,
    /// Current annual expected provisions.
    pub annual_provisions: Decimal,
}

impl Default for Minter {
    fn default() -> Self {
        Self {
            inflation: Decimal::new(13, 2),
            annual_provisions: Decimal::ZERO,
        }
    }
}

/// Inflation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub mint_denom: String,
    /// Maximum annual change in inflation rate.
    pub inflation_rate_change: Decimal,
    pub inflation_max: Decimal,
    pub inflation_min: Decimal,
    /// Target share of supply that is bonded.
    pub goal_bonded: Decimal,
    pub blocks_per_year: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mint_denom: "stake".to_string(),
            inflation_rate_change: Decimal::new(13, 2),
            inflation_max: Decimal::new(20, 2),
            inflation_min: Decimal::new(7, 2),
            goal_bonded: Decimal::new(67, 2),
            // 5-second blocks
            blocks_per_year: 60 * 60 * 8766 / 5,
        }
    }
}

/// Mint genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub minter: Minter,
    pub params: Params,
}

/// Validate the mint sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), MintError> {
    let params = &state.params;

    validate_denom(&params.mint_denom).map_err(MintError::InvalidMintDenom)?;
    if params.inflation_min < Decimal::ZERO {
        return Err(MintError::NegativeInflationMin(params.inflation_min));
    }
    if params.inflation_max < params.inflation_min {
        return Err(MintError::InflationBounds {
            min: params.inflation_min,
            max: params.inflation_max,
        });
    }
    if params.inflation_rate_change < Decimal::ZERO {
        return Err(MintError::NegativeRateChange(params.inflation_rate_change));
    }
    if !is_positive_fraction(params.goal_bonded) {
        return Err(MintError::GoalBondedOutOfRange(params.goal_bonded));
    }
    if params.blocks_per_year == 0 {
        return Err(MintError::ZeroBlocksPerYear);
    }

    if state.minter.inflation < Decimal::ZERO {
        return Err(MintError::NegativeInflation(state.minter.inflation));
    }
    if state.minter.annual_provisions < Decimal::ZERO {
        return Err(MintError::NegativeAnnualProvisions(
            state.minter.annual_provisions,
        ));
    }
    Ok(())
}
