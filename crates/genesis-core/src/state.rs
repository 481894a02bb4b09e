//! # Module State Container
//!
//! One sub-state per accounting module, plus the account list and the
//! bootstrap transactions. Exactly one container exists per genesis event:
//! built by the defaults or decoded from a document, mutated once when the
//! bootstrap transactions are attached, then read-only.

use genesis_modules::{
    auth, bandwidth, bank, crisis, distribution, gov, mint, rank, slashing, staking, supply, wasm,
};
use serde::{Deserialize, Serialize};
use shared_types::Address;

use crate::account::GenesisAccount;
use crate::tx::RawTx;

/// The application state embedded in a genesis document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub accounts: Vec<GenesisAccount>,
    pub auth: auth::GenesisState,
    pub bank: bank::GenesisState,
    pub staking: staking::GenesisState,
    pub pool: staking::Pool,
    pub mint: mint::GenesisState,
    pub distribution: distribution::GenesisState,
    pub gov: gov::GenesisState,
    pub crisis: crisis::GenesisState,
    pub slashing: slashing::GenesisState,
    pub supply: supply::GenesisState,
    pub bandwidth: bandwidth::GenesisState,
    pub rank: rank::GenesisState,
    pub wasm: wasm::GenesisState,
    /// Bootstrap transactions, in submission order.
    #[serde(default)]
    pub gentxs: Vec<RawTx>,
}

impl GenesisState {
    /// Account addresses in declaration order, duplicates included.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.accounts.iter().map(|account| account.address)
    }

    /// Decode a container from a document's `app_state`.
    pub fn from_json(app_state: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(app_state)
    }

    /// Serialize for embedding into a document.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
