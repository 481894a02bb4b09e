//! # Slashing
//!
//! Penalties for validator downtime and double signing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ratio::is_fraction;
use crate::staking::DEFAULT_UNBONDING_TIME_SECS;

pub const MODULE_NAME: &str = "slashing";

/// Slashing validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlashingError {
    #[error("signed blocks window must be positive")]
    ZeroSignedBlocksWindow,

    #[error("max evidence age must be positive")]
    ZeroMaxEvidenceAge,

    #[error("min signed per window should be within [0, 1], got {0}")]
    MinSignedOutOfRange(Decimal),

    #[error("double sign slash fraction should be within [0, 1], got {0}")]
    DoubleSignFractionOutOfRange(Decimal),

    #[error("downtime slash fraction should be within [0, 1], got {0}")]
    DowntimeFractionOutOfRange(Decimal),
}

/// Slashing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Evidence older than this is ignored.
    pub max_evidence_age_secs: u64,
    /// Number of blocks over which liveness is measured.
    pub signed_blocks_window: u64,
    pub min_signed_per_window: Decimal,
    pub downtime_jail_duration_secs: u64,
    pub slash_fraction_double_sign: Decimal,
    pub slash_fraction_downtime: Decimal,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_evidence_age_secs: DEFAULT_UNBONDING_TIME_SECS,
            signed_blocks_window: 100,
            min_signed_per_window: Decimal::new(5, 1),
            downtime_jail_duration_secs: 60 * 10,
            slash_fraction_double_sign: Decimal::new(5, 2),
            slash_fraction_downtime: Decimal::new(1, 2),
        }
    }
}

/// Slashing genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
}

/// Validate the slashing sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), SlashingError> {
    let params = &state.params;

    if params.signed_blocks_window == 0 {
        return Err(SlashingError::ZeroSignedBlocksWindow);
    }
    if params.max_evidence_age_secs == 0 {
        return Err(SlashingError::ZeroMaxEvidenceAge);
    }
    if !is_fraction(params.min_signed_per_window) {
        return Err(SlashingError::MinSignedOutOfRange(params.min_signed_per_window));
    }
    if !is_fraction(params.slash_fraction_double_sign) {
        return Err(SlashingError::DoubleSignFractionOutOfRange(
            params.slash_fraction_double_sign,
        ));
    }
    if !is_fraction(params.slash_fraction_downtime) {
        return Err(SlashingError::DowntimeFractionOutOfRange(
            params.slash_fraction_downtime,
        ));
    }
    Ok(())
}
