//! # Governance
//!
//! On-chain proposals: deposits, voting and tallying.
//!
//! A proposal enters voting once its deposits reach `min_deposit` within
//! `max_deposit_period`. It passes when turnout reaches `quorum`, the share
//! of yes votes exceeds `threshold`, and the share of veto votes stays below
//! `veto`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{CoinError, Coins};
use thiserror::Error;

use crate::ratio::{is_fraction, is_positive_fraction};

pub const MODULE_NAME: &str = "gov";

/// Governance validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovError {
    #[error("governance starting_proposal_id must be at least 1")]
    ZeroStartingProposalId,

    #[error("governance min deposit {coins} is not a valid coin set: {source}")]
    InvalidMinDeposit {
        coins: String,
        #[source]
        source: CoinError,
    },

    #[error("governance max_deposit_period must be positive")]
    ZeroMaxDepositPeriod,

    #[error("governance voting_period must be positive")]
    ZeroVotingPeriod,

    #[error("governance vote quorum should be within [0, 1], is {0}")]
    QuorumOutOfRange(Decimal),

    #[error("governance vote threshold should be positive and less or equal to one, is {0}")]
    ThresholdOutOfRange(Decimal),

    #[error("governance vote veto threshold should be positive and less or equal to one, is {0}")]
    VetoOutOfRange(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepositParams {
    pub min_deposit: Coins,
    pub max_deposit_period_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VotingParams {
    pub voting_period_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyParams {
    pub quorum: Decimal,
    pub threshold: Decimal,
    pub veto: Decimal,
}

impl Default for TallyParams {
    fn default() -> Self {
        Self {
            quorum: Decimal::new(334, 3),
            threshold: Decimal::new(5, 1),
            veto: Decimal::new(334, 3),
        }
    }
}

/// Governance genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub starting_proposal_id: u64,
    pub deposit_params: DepositParams,
    pub voting_params: VotingParams,
    pub tally_params: TallyParams,
}

impl Default for GenesisState {
    fn default() -> Self {
        // two days
        let period = 60 * 60 * 24 * 2;
        Self {
            starting_proposal_id: 1,
            deposit_params: DepositParams {
                min_deposit: Coins::from(shared_types::Coin::new("stake", 10_000_000u64)),
                max_deposit_period_secs: period,
            },
            voting_params: VotingParams {
                voting_period_secs: period,
            },
            tally_params: TallyParams::default(),
        }
    }
}

/// Validate the governance sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), GovError> {
    if state.starting_proposal_id == 0 {
        return Err(GovError::ZeroStartingProposalId);
    }

    let tally = &state.tally_params;
    if !is_fraction(tally.quorum) {
        return Err(GovError::QuorumOutOfRange(tally.quorum));
    }
    if !is_positive_fraction(tally.threshold) {
        return Err(GovError::ThresholdOutOfRange(tally.threshold));
    }
    if !is_positive_fraction(tally.veto) {
        return Err(GovError::VetoOutOfRange(tally.veto));
    }

    let deposit = &state.deposit_params;
    deposit
        .min_deposit
        .validate()
        .map_err(|source| GovError::InvalidMinDeposit {
            coins: deposit.min_deposit.to_string(),
            source,
        })?;
    if deposit.max_deposit_period_secs == 0 {
        return Err(GovError::ZeroMaxDepositPeriod);
    }
    if state.voting_params.voting_period_secs == 0 {
        return Err(GovError::ZeroVotingPeriod);
    }
    Ok(())
}
