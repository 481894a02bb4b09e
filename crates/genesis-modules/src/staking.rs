//! # Staking
//!
//! Validator registry, delegations and bonding parameters.
//!
//! At genesis the validator set is usually empty: validators are registered
//! by the bootstrap transactions, each carrying one [`MsgCreateValidator`].
//! A document exported from a running network may carry validators and
//! delegations, so the checks below cover both shapes.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{validate_denom, Address, Coin, CoinError, U256};
use thiserror::Error;

pub const MODULE_NAME: &str = "staking";

/// Three weeks.
pub const DEFAULT_UNBONDING_TIME_SECS: u64 = 60 * 60 * 24 * 3 * 7;

/// Staking validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakingError {
    #[error("staking parameter unbonding_time must be positive")]
    ZeroUnbondingTime,

    #[error("staking parameter max_validators must be positive")]
    ZeroMaxValidators,

    #[error("staking parameter max_entries must be positive")]
    ZeroMaxEntries,

    #[error("invalid bond denom: {0}")]
    InvalidBondDenom(#[source] CoinError),

    #[error("duplicate validator operator address in genesis state: {0}")]
    DuplicateValidator(Address),

    #[error("duplicate validator consensus pubkey in genesis state: {0}")]
    DuplicateConsensusPubkey(String),

    #[error("validator {0} is bonded and jailed in genesis state")]
    BondedAndJailed(Address),

    #[error("bonded/unbonded genesis validator {0} cannot have zero delegator shares")]
    ZeroDelegatorShares(Address),

    #[error("delegation from {delegator} to {validator} has non-positive shares")]
    NonPositiveDelegationShares { delegator: Address, validator: Address },
}

/// Bonding parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Time a delegation stays locked after unbonding starts.
    pub unbonding_time_secs: u64,
    /// Size of the active validator set.
    pub max_validators: u16,
    /// Max unbonding/redelegation entries per delegator-validator pair.
    pub max_entries: u16,
    pub bond_denom: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            unbonding_time_secs: DEFAULT_UNBONDING_TIME_SECS,
            max_validators: 100,
            max_entries: 7,
            bond_denom: "stake".to_string(),
        }
    }
}

/// Bonding status of a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondStatus {
    Unbonded,
    Unbonding,
    Bonded,
}

/// Public profile of a validator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub details: String,
}

/// Commission a validator charges its delegators.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommissionRates {
    pub rate: Decimal,
    pub max_rate: Decimal,
    pub max_change_rate: Decimal,
}

/// A registered validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub operator_address: Address,
    pub consensus_pubkey: String,
    #[serde(default)]
    pub jailed: bool,
    pub status: BondStatus,
    #[serde(with = "shared_types::amount")]
    pub tokens: U256,
    pub delegator_shares: Decimal,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub commission: CommissionRates,
    #[serde(with = "shared_types::amount")]
    pub min_self_delegation: U256,
}

/// Stake bonded by a delegator to a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator_address: Address,
    pub validator_address: Address,
    pub shares: Decimal,
}

/// Bonded / not-bonded token pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pool {
    #[serde(with = "shared_types::amount")]
    pub not_bonded_tokens: U256,
    #[serde(with = "shared_types::amount")]
    pub bonded_tokens: U256,
}

/// Staking genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub delegations: Vec<Delegation>,
    /// Set when the state was exported from a running chain.
    #[serde(default)]
    pub exported: bool,
}

/// Validate the staking sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), StakingError> {
    validate_params(&state.params)?;
    validate_validators(&state.validators)?;

    for delegation in &state.delegations {
        if delegation.shares <= Decimal::ZERO {
            return Err(StakingError::NonPositiveDelegationShares {
                delegator: delegation.delegator_address,
                validator: delegation.validator_address,
            });
        }
    }
    Ok(())
}

fn validate_params(params: &Params) -> Result<(), StakingError> {
    if params.unbonding_time_secs == 0 {
        return Err(StakingError::ZeroUnbondingTime);
    }
    if params.max_validators == 0 {
        return Err(StakingError::ZeroMaxValidators);
    }
    if params.max_entries == 0 {
        return Err(StakingError::ZeroMaxEntries);
    }
    validate_denom(&params.bond_denom).map_err(StakingError::InvalidBondDenom)
}

fn validate_validators(validators: &[Validator]) -> Result<(), StakingError> {
    let mut operators = HashSet::with_capacity(validators.len());
    let mut pubkeys = HashSet::with_capacity(validators.len());

    for validator in validators {
        if !operators.insert(validator.operator_address) {
            return Err(StakingError::DuplicateValidator(validator.operator_address));
        }
        if !pubkeys.insert(validator.consensus_pubkey.as_str()) {
            return Err(StakingError::DuplicateConsensusPubkey(
                validator.consensus_pubkey.clone(),
            ));
        }
        if validator.jailed && validator.status == BondStatus::Bonded {
            return Err(StakingError::BondedAndJailed(validator.operator_address));
        }
        if validator.delegator_shares.is_zero() && validator.status != BondStatus::Unbonding {
            return Err(StakingError::ZeroDelegatorShares(validator.operator_address));
        }
    }
    Ok(())
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Register a new validator with an initial self-delegation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateValidator {
    #[serde(default)]
    pub description: Description,
    pub commission: CommissionRates,
    #[serde(with = "shared_types::amount")]
    pub min_self_delegation: U256,
    pub delegator_address: Address,
    pub validator_address: Address,
    pub pubkey: String,
    pub value: Coin,
}

/// Delegate stake to an existing validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDelegate {
    pub delegator_address: Address,
    pub validator_address: Address,
    pub amount: Coin,
}
