//! # Bank
//!
//! Balance transfers. Balances themselves live on the accounts; the bank
//! sub-state only carries the global send switch.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Coins};

pub const MODULE_NAME: &str = "bank";

/// Bank genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub send_enabled: bool,
}

impl Default for GenesisState {
    fn default() -> Self {
        Self { send_enabled: true }
    }
}

/// Every bank sub-state is valid.
pub fn validate_genesis(_state: &GenesisState) -> Result<(), std::convert::Infallible> {
    Ok(())
}

/// Transfer coins between two accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: Address,
    pub to_address: Address,
    pub amount: Coins,
}
