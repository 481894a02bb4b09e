//! Aggregate of every module's validation error.

use std::convert::Infallible;

use thiserror::Error;

use crate::auth::AuthError;
use crate::bandwidth::BandwidthError;
use crate::crisis::CrisisError;
use crate::distribution::DistributionError;
use crate::gov::GovError;
use crate::mint::MintError;
use crate::rank::RankError;
use crate::slashing::SlashingError;
use crate::staking::StakingError;
use crate::supply::SupplyError;
use crate::wasm::WasmError;

/// A module's own validation error, passed through verbatim.
///
/// Display and `source()` are those of the wrapped error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModuleError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Bandwidth(#[from] BandwidthError),
    #[error(transparent)]
    Crisis(#[from] CrisisError),
    #[error(transparent)]
    Distribution(#[from] DistributionError),
    #[error(transparent)]
    Gov(#[from] GovError),
    #[error(transparent)]
    Mint(#[from] MintError),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Slashing(#[from] SlashingError),
    #[error(transparent)]
    Staking(#[from] StakingError),
    #[error(transparent)]
    Supply(#[from] SupplyError),
    #[error(transparent)]
    Wasm(#[from] WasmError),
}

// Modules whose every sub-state is valid report `Infallible`.
impl From<Infallible> for ModuleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl ModuleError {
    /// Name of the module that rejected its sub-state.
    pub fn module(&self) -> &'static str {
        match self {
            Self::Auth(_) => crate::auth::MODULE_NAME,
            Self::Bandwidth(_) => crate::bandwidth::MODULE_NAME,
            Self::Crisis(_) => crate::crisis::MODULE_NAME,
            Self::Distribution(_) => crate::distribution::MODULE_NAME,
            Self::Gov(_) => crate::gov::MODULE_NAME,
            Self::Mint(_) => crate::mint::MODULE_NAME,
            Self::Rank(_) => crate::rank::MODULE_NAME,
            Self::Slashing(_) => crate::slashing::MODULE_NAME,
            Self::Staking(_) => crate::staking::MODULE_NAME,
            Self::Supply(_) => crate::supply::MODULE_NAME,
            Self::Wasm(_) => crate::wasm::MODULE_NAME,
        }
    }
}
