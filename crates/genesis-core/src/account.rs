//! # Accounts
//!
//! Declarative account descriptors as they appear in a genesis document, and
//! the concrete accounts they normalize into.
//!
//! ## Dispatch
//!
//! | `original_vesting` | `start_time` | `end_time` | `module_name` | Result |
//! |---|---|---|---|---|
//! | non-zero | ≠ 0 | ≠ 0 | any | [`Account::ContinuousVesting`] |
//! | non-zero | 0 | ≠ 0 | any | [`Account::DelayedVesting`] |
//! | non-zero | any | 0 | any | [`AccountError::InvalidVesting`] |
//! | zero | any | any | non-empty | [`Account::Module`] |
//! | zero | any | any | empty | [`Account::Base`] |

use serde::{Deserialize, Serialize};
use shared_types::{Address, Coins};
use thiserror::Error;

/// Account normalization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// A vesting balance with no end time can never unlock.
    #[error("invalid genesis vesting account {address}: vesting balance set with zero end time")]
    InvalidVesting { address: Address },
}

/// An account descriptor from the genesis document.
///
/// Consumed once by [`normalize`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub address: Address,
    #[serde(default)]
    pub coins: Coins,
    #[serde(default)]
    pub sequence_number: u64,
    #[serde(default)]
    pub account_number: u64,

    // vesting
    #[serde(default)]
    pub original_vesting: Coins,
    #[serde(default)]
    pub delegated_free: Coins,
    #[serde(default)]
    pub delegated_vesting: Coins,
    /// Unix seconds, zero when unset.
    #[serde(default)]
    pub start_time: i64,
    /// Unix seconds, zero when unset.
    #[serde(default)]
    pub end_time: i64,

    // module account
    #[serde(default)]
    pub module_name: String,
    #[serde(default)]
    pub module_permissions: Vec<String>,
}

impl GenesisAccount {
    /// A plain account holding `coins`.
    pub fn new(address: Address, coins: Coins) -> Self {
        Self {
            address,
            coins,
            sequence_number: 0,
            account_number: 0,
            original_vesting: Coins::empty(),
            delegated_free: Coins::empty(),
            delegated_vesting: Coins::empty(),
            start_time: 0,
            end_time: 0,
            module_name: String::new(),
            module_permissions: Vec::new(),
        }
    }

    pub fn is_vesting(&self) -> bool {
        !self.original_vesting.is_zero()
    }

    pub fn is_module(&self) -> bool {
        !self.module_name.is_empty()
    }
}

// =============================================================================
// CONCRETE ACCOUNTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAccount {
    pub address: Address,
    pub coins: Coins,
    pub account_number: u64,
    pub sequence: u64,
}

/// Fields shared by every vesting schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseVestingAccount {
    pub base: BaseAccount,
    pub original_vesting: Coins,
    pub delegated_free: Coins,
    pub delegated_vesting: Coins,
    pub end_time: i64,
}

/// Unlocks linearly between `start_time` and `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousVestingAccount {
    pub base_vesting: BaseVestingAccount,
    pub start_time: i64,
}

/// Unlocks everything at `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedVestingAccount {
    pub base_vesting: BaseVestingAccount,
}

/// An account owned by a protocol module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccount {
    pub base: BaseAccount,
    pub name: String,
    pub permissions: Vec<String>,
}

/// A normalized account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Account {
    Base(BaseAccount),
    ContinuousVesting(ContinuousVestingAccount),
    DelayedVesting(DelayedVestingAccount),
    Module(ModuleAccount),
}

impl Account {
    fn base(&self) -> &BaseAccount {
        match self {
            Self::Base(base) => base,
            Self::ContinuousVesting(acc) => &acc.base_vesting.base,
            Self::DelayedVesting(acc) => &acc.base_vesting.base,
            Self::Module(acc) => &acc.base,
        }
    }

    pub fn address(&self) -> Address {
        self.base().address
    }

    pub fn coins(&self) -> &Coins {
        &self.base().coins
    }

    pub fn is_vesting(&self) -> bool {
        matches!(self, Self::ContinuousVesting(_) | Self::DelayedVesting(_))
    }
}

/// Convert a descriptor into its concrete account.
///
/// Balances come out in canonical denomination order. The only failure is a
/// vesting balance without an end time.
pub fn normalize(descriptor: &GenesisAccount) -> Result<Account, AccountError> {
    let base = BaseAccount {
        address: descriptor.address,
        coins: descriptor.coins.clone().sorted(),
        account_number: descriptor.account_number,
        sequence: descriptor.sequence_number,
    };

    if descriptor.is_vesting() {
        if descriptor.end_time == 0 {
            return Err(AccountError::InvalidVesting {
                address: descriptor.address,
            });
        }

        let base_vesting = BaseVestingAccount {
            base,
            original_vesting: descriptor.original_vesting.clone().sorted(),
            delegated_free: descriptor.delegated_free.clone(),
            delegated_vesting: descriptor.delegated_vesting.clone(),
            end_time: descriptor.end_time,
        };

        return Ok(if descriptor.start_time != 0 {
            Account::ContinuousVesting(ContinuousVestingAccount {
                base_vesting,
                start_time: descriptor.start_time,
            })
        } else {
            Account::DelayedVesting(DelayedVestingAccount { base_vesting })
        });
    }

    if descriptor.is_module() {
        return Ok(Account::Module(ModuleAccount {
            base,
            name: descriptor.module_name.clone(),
            permissions: descriptor.module_permissions.clone(),
        }));
    }

    Ok(Account::Base(base))
}
