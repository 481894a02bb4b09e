//! # Distribution
//!
//! Fee distribution: community tax and block proposer rewards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{Address, DecCoins};
use thiserror::Error;

use crate::ratio::is_fraction;

pub const MODULE_NAME: &str = "distribution";

/// Distribution validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("distribution parameter community_tax should be within [0, 1], got {0}")]
    CommunityTaxOutOfRange(Decimal),

    #[error("distribution parameter base_proposer_reward should be non-negative, got {0}")]
    NegativeBaseProposerReward(Decimal),

    #[error("distribution parameter bonus_proposer_reward should be non-negative, got {0}")]
    NegativeBonusProposerReward(Decimal),

    #[error("sum of base ({base}) and bonus ({bonus}) proposer rewards cannot exceed one")]
    ProposerRewardsExceedOne { base: Decimal, bonus: Decimal },

    #[error("negative community pool amount for {denom}: {amount}")]
    NegativeCommunityPool { denom: String, amount: Decimal },
}

/// Accumulated, undistributed fees.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeePool {
    #[serde(default)]
    pub community_pool: DecCoins,
}

/// Distribution genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub fee_pool: FeePool,
    pub community_tax: Decimal,
    pub base_proposer_reward: Decimal,
    pub bonus_proposer_reward: Decimal,
    pub withdraw_addr_enabled: bool,
    #[serde(default)]
    pub previous_proposer: Option<Address>,
}

impl Default for GenesisState {
    fn default() -> Self {
        Self {
            fee_pool: FeePool::default(),
            community_tax: Decimal::new(2, 2),
            base_proposer_reward: Decimal::new(1, 2),
            bonus_proposer_reward: Decimal::new(4, 2),
            withdraw_addr_enabled: true,
            previous_proposer: None,
        }
    }
}

/// Validate the distribution sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), DistributionError> {
    if !is_fraction(state.community_tax) {
        return Err(DistributionError::CommunityTaxOutOfRange(state.community_tax));
    }
    if state.base_proposer_reward < Decimal::ZERO {
        return Err(DistributionError::NegativeBaseProposerReward(
            state.base_proposer_reward,
        ));
    }
    if state.bonus_proposer_reward < Decimal::ZERO {
        return Err(DistributionError::NegativeBonusProposerReward(
            state.bonus_proposer_reward,
        ));
    }
    let total_reward = state
        .base_proposer_reward
        .checked_add(state.bonus_proposer_reward);
    if total_reward.map_or(true, |total| total > Decimal::ONE) {
        return Err(DistributionError::ProposerRewardsExceedOne {
            base: state.base_proposer_reward,
            bonus: state.bonus_proposer_reward,
        });
    }
    if let Some(coin) = state.fee_pool.community_pool.first_negative() {
        return Err(DistributionError::NegativeCommunityPool {
            denom: coin.denom.clone(),
            amount: coin.amount,
        });
    }
    Ok(())
}
