//! # Bandwidth
//!
//! Fee-less bandwidth metering. Every account earns bandwidth proportional
//! to its stake, recovered linearly over `recovery_period` blocks. The credit
//! price floats around `base_credit_price` so that network load tends toward
//! `desirable_bandwidth`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODULE_NAME: &str = "bandwidth";

/// Bandwidth validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandwidthError {
    #[error("bandwidth parameter recovery_period must be positive")]
    ZeroRecoveryPeriod,

    #[error("bandwidth parameter adjust_price_period must be positive")]
    ZeroAdjustPricePeriod,

    #[error("bandwidth parameter base_credit_price must be positive, got {0}")]
    NonPositiveBaseCreditPrice(Decimal),

    #[error("bandwidth parameter desirable_bandwidth must be positive")]
    ZeroDesirableBandwidth,

    #[error("bandwidth parameter max_block_bandwidth must be positive")]
    ZeroMaxBlockBandwidth,
}

/// Bandwidth parameters. Periods are in blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub recovery_period: u64,
    pub adjust_price_period: u64,
    pub base_credit_price: Decimal,
    pub desirable_bandwidth: u64,
    pub max_block_bandwidth: u64,
    pub link_msg_cost: u64,
    pub tx_cost: u64,
    pub non_link_msg_cost: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            recovery_period: 16_000,
            adjust_price_period: 10,
            base_credit_price: Decimal::new(25, 2),
            desirable_bandwidth: 2_000_000_000,
            max_block_bandwidth: 111_111_111,
            link_msg_cost: 100,
            tx_cost: 300,
            non_link_msg_cost: 500,
        }
    }
}

/// Bandwidth genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
}

/// Validate the bandwidth sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), BandwidthError> {
    let params = &state.params;

    if params.recovery_period == 0 {
        return Err(BandwidthError::ZeroRecoveryPeriod);
    }
    if params.adjust_price_period == 0 {
        return Err(BandwidthError::ZeroAdjustPricePeriod);
    }
    if params.base_credit_price <= Decimal::ZERO {
        return Err(BandwidthError::NonPositiveBaseCreditPrice(
            params.base_credit_price,
        ));
    }
    if params.desirable_bandwidth == 0 {
        return Err(BandwidthError::ZeroDesirableBandwidth);
    }
    if params.max_block_bandwidth == 0 {
        return Err(BandwidthError::ZeroMaxBlockBandwidth);
    }
    Ok(())
}
