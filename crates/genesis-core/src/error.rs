//! Genesis pipeline errors.

use genesis_modules::ModuleError;
use shared_types::Address;
use thiserror::Error;

use crate::account::AccountError;
use crate::tx::TxDecodeError;

/// Coarse classification of a [`GenesisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be decoded.
    Decode,
    /// Input decoded but violates a rule.
    Validation,
    /// The genesis configuration can never produce a startable chain.
    FatalConfiguration,
}

/// Errors from assembling or validating a genesis state.
///
/// Nothing is retried and there is no partial success: the first error
/// aborts startup.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("failed to decode genesis app state: {0}")]
    AppStateDecode(#[source] serde_json::Error),

    #[error("failed to encode genesis app state: {0}")]
    AppStateEncode(#[source] serde_json::Error),

    #[error("at least one bootstrap transaction required")]
    NoBootstrapTransactions,

    #[error("failed to decode bootstrap transaction {index}: {source}")]
    TxDecode {
        index: usize,
        #[source]
        source: TxDecodeError,
    },

    #[error("bootstrap transaction {index} must contain exactly 1 message, found {count}")]
    InvalidMessageCount { index: usize, count: usize },

    #[error("bootstrap transaction {index} does not contain a create-validator message")]
    NotCreateValidator { index: usize },

    #[error("duplicate account in genesis state: address {0}")]
    DuplicateAccount(Address),

    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error("fatal genesis configuration: {0}")]
    FatalConfiguration(#[from] AccountError),
}

impl GenesisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AppStateDecode(_) | Self::AppStateEncode(_) | Self::TxDecode { .. } => {
                ErrorKind::Decode
            }
            Self::NoBootstrapTransactions
            | Self::InvalidMessageCount { .. }
            | Self::NotCreateValidator { .. }
            | Self::DuplicateAccount(_)
            | Self::Module(_) => ErrorKind::Validation,
            Self::FatalConfiguration(_) => ErrorKind::FatalConfiguration,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::FatalConfiguration
    }
}
