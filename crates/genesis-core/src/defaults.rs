//! # Default Genesis State
//!
//! The baseline container used when no genesis document is supplied.
//!
//! Every economic constant lives in [`GenesisParams`]. The deployment values
//! are its `Default`; a host may override any subset from TOML:
//!
//! ```toml
//! bond_denom = "cyb"
//! max_validators = 21
//! goal_bonded = "0.75"
//! min_deposit = "1000000000"
//! ```
//!
//! Integer token amounts are written as strings.

use genesis_modules::{
    auth, bandwidth, bank, crisis, distribution, gov, mint, rank, slashing, staking, supply, wasm,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{Coin, Coins, U256};
use thiserror::Error;
use tracing::debug;

/// Parameter loading errors.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("invalid genesis parameters: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Baseline economic, staking and voting constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisParams {
    // denominations
    pub bond_denom: String,
    pub mint_denom: String,
    pub fee_denom: String,

    // mint
    pub initial_inflation: Decimal,
    pub inflation_min: Decimal,
    pub inflation_max: Decimal,
    pub inflation_rate_change: Decimal,
    pub goal_bonded: Decimal,
    pub blocks_per_year: u64,

    // staking
    pub max_validators: u16,
    pub max_entries: u16,
    pub unbonding_time_secs: u64,

    // slashing
    pub max_evidence_age_secs: u64,
    pub signed_blocks_window: u64,
    pub min_signed_per_window: Decimal,
    pub downtime_jail_duration_secs: u64,
    pub slash_fraction_double_sign: Decimal,
    pub slash_fraction_downtime: Decimal,

    // distribution
    pub community_tax: Decimal,
    pub base_proposer_reward: Decimal,
    pub bonus_proposer_reward: Decimal,
    pub withdraw_addr_enabled: bool,

    // gov
    pub starting_proposal_id: u64,
    #[serde(with = "shared_types::amount")]
    pub min_deposit: U256,
    pub max_deposit_period_secs: u64,
    pub voting_period_secs: u64,
    pub quorum: Decimal,
    pub threshold: Decimal,
    pub veto: Decimal,

    // crisis
    #[serde(with = "shared_types::amount")]
    pub crisis_constant_fee: U256,

    // auth
    pub max_memo_characters: u64,
    pub tx_sig_limit: u64,
    pub tx_size_cost_per_byte: u64,
    pub sig_verify_cost_ed25519: u64,
    pub sig_verify_cost_secp256k1: u64,

    // bank
    pub send_enabled: bool,
}

impl Default for GenesisParams {
    fn default() -> Self {
        let unbonding_time_secs = staking::DEFAULT_UNBONDING_TIME_SECS;
        // two hours
        let gov_period_secs = 60 * 60 * 2;

        Self {
            bond_denom: "cyb".to_string(),
            mint_denom: "cyb".to_string(),
            fee_denom: "cyb".to_string(),

            initial_inflation: Decimal::new(3, 2),
            inflation_min: Decimal::new(1, 2),
            inflation_max: Decimal::new(15, 2),
            inflation_rate_change: Decimal::new(10, 2),
            goal_bonded: Decimal::new(88, 2),
            // 5-second blocks
            blocks_per_year: 60 * 60 * 8766 / 5,

            max_validators: 7,
            max_entries: 7,
            unbonding_time_secs,

            max_evidence_age_secs: unbonding_time_secs,
            // ~20 minutes of blocks
            signed_blocks_window: 240,
            min_signed_per_window: Decimal::new(80, 2),
            downtime_jail_duration_secs: 0,
            slash_fraction_double_sign: Decimal::new(5, 2),
            slash_fraction_downtime: Decimal::new(5, 4),

            community_tax: Decimal::new(10, 2),
            base_proposer_reward: Decimal::new(1, 2),
            bonus_proposer_reward: Decimal::new(5, 2),
            withdraw_addr_enabled: true,

            starting_proposal_id: 1,
            min_deposit: U256::from(500_000_000_000u64),
            max_deposit_period_secs: gov_period_secs,
            voting_period_secs: gov_period_secs,
            quorum: Decimal::new(334, 3),
            threshold: Decimal::new(5, 1),
            veto: Decimal::new(334, 3),

            crisis_constant_fee: U256::from(1000u64),

            max_memo_characters: 256,
            tx_sig_limit: 10,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_ed25519: 590,
            sig_verify_cost_secp256k1: 1000,

            send_enabled: true,
        }
    }
}

impl GenesisParams {
    /// Parse overrides from TOML. Absent keys keep their default.
    pub fn from_toml_str(text: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(text)?)
    }
}

/// Builds the baseline [`GenesisState`](crate::GenesisState).
pub struct DefaultGenesisBuilder {
    params: GenesisParams,
}

impl DefaultGenesisBuilder {
    pub fn new(params: GenesisParams) -> Self {
        Self { params }
    }

    /// Build the container: no accounts, no bootstrap transactions.
    ///
    /// Pure: the same parameters always produce the same container.
    pub fn build(self) -> crate::GenesisState {
        let p = self.params;

        debug!(
            bond_denom = %p.bond_denom,
            max_validators = p.max_validators,
            "Building default genesis state"
        );

        crate::GenesisState {
            accounts: Vec::new(),
            auth: auth::GenesisState {
                params: auth::Params {
                    max_memo_characters: p.max_memo_characters,
                    tx_sig_limit: p.tx_sig_limit,
                    tx_size_cost_per_byte: p.tx_size_cost_per_byte,
                    sig_verify_cost_ed25519: p.sig_verify_cost_ed25519,
                    sig_verify_cost_secp256k1: p.sig_verify_cost_secp256k1,
                },
            },
            bank: bank::GenesisState {
                send_enabled: p.send_enabled,
            },
            staking: staking::GenesisState {
                params: staking::Params {
                    unbonding_time_secs: p.unbonding_time_secs,
                    max_validators: p.max_validators,
                    max_entries: p.max_entries,
                    bond_denom: p.bond_denom,
                },
                ..Default::default()
            },
            pool: staking::Pool::default(),
            mint: mint::GenesisState {
                minter: mint::Minter {
                    inflation: p.initial_inflation,
                    annual_provisions: Decimal::ZERO,
                },
                params: mint::Params {
                    mint_denom: p.mint_denom,
                    inflation_rate_change: p.inflation_rate_change,
                    inflation_max: p.inflation_max,
                    inflation_min: p.inflation_min,
                    goal_bonded: p.goal_bonded,
                    blocks_per_year: p.blocks_per_year,
                },
            },
            distribution: distribution::GenesisState {
                fee_pool: distribution::FeePool::default(),
                community_tax: p.community_tax,
                base_proposer_reward: p.base_proposer_reward,
                bonus_proposer_reward: p.bonus_proposer_reward,
                withdraw_addr_enabled: p.withdraw_addr_enabled,
                previous_proposer: None,
            },
            gov: gov::GenesisState {
                starting_proposal_id: p.starting_proposal_id,
                deposit_params: gov::DepositParams {
                    min_deposit: Coins::from(Coin::new(p.fee_denom.clone(), p.min_deposit)),
                    max_deposit_period_secs: p.max_deposit_period_secs,
                },
                voting_params: gov::VotingParams {
                    voting_period_secs: p.voting_period_secs,
                },
                tally_params: gov::TallyParams {
                    quorum: p.quorum,
                    threshold: p.threshold,
                    veto: p.veto,
                },
            },
            crisis: crisis::GenesisState {
                constant_fee: Coin::new(p.fee_denom, p.crisis_constant_fee),
            },
            slashing: slashing::GenesisState {
                params: slashing::Params {
                    max_evidence_age_secs: p.max_evidence_age_secs,
                    signed_blocks_window: p.signed_blocks_window,
                    min_signed_per_window: p.min_signed_per_window,
                    downtime_jail_duration_secs: p.downtime_jail_duration_secs,
                    slash_fraction_double_sign: p.slash_fraction_double_sign,
                    slash_fraction_downtime: p.slash_fraction_downtime,
                },
            },
            supply: supply::GenesisState::default(),
            bandwidth: bandwidth::GenesisState::default(),
            rank: rank::GenesisState::default(),
            wasm: wasm::GenesisState::default(),
            gentxs: Vec::new(),
        }
    }
}

/// The baseline container with deployment defaults.
pub fn build_default() -> crate::GenesisState {
    DefaultGenesisBuilder::new(GenesisParams::default()).build()
}
