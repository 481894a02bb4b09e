//! # Genesis Validation
//!
//! Cross-module consistency check that must pass before a node may launch.
//!
//! Fail-fast, in this order:
//!
//! 1. No two accounts share an address.
//! 2. Every account descriptor normalizes.
//! 3. Every registered module accepts its sub-state.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::account::{normalize, Account};
use crate::error::GenesisError;
use crate::registry::ModuleRegistry;
use crate::state::GenesisState;

pub struct GenesisValidator {
    registry: ModuleRegistry,
}

impl GenesisValidator {
    pub fn new(registry: ModuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Validate a completed container.
    pub fn validate(&self, state: &GenesisState) -> Result<(), GenesisError> {
        self.validate_and_normalize(state).map(|_| ())
    }

    /// [`validate`](Self::validate), returning the normalized accounts.
    pub fn validate_and_normalize(
        &self,
        state: &GenesisState,
    ) -> Result<Vec<Account>, GenesisError> {
        let accounts = self.validate_accounts(state)?;

        for module in self.registry.iter() {
            debug!(module = module.name(), "Validating module genesis state");
            module.validate_genesis(state).map_err(|e| {
                warn!(module = module.name(), error = %e, "Module rejected genesis state");
                GenesisError::Module(e)
            })?;
        }

        info!(
            accounts = state.accounts.len(),
            modules = self.registry.len(),
            "Genesis state validated"
        );
        Ok(accounts)
    }

    /// Check the account list and return the normalized accounts.
    pub fn validate_accounts(&self, state: &GenesisState) -> Result<Vec<Account>, GenesisError> {
        let mut seen = HashSet::with_capacity(state.accounts.len());
        for address in state.addresses() {
            if !seen.insert(address) {
                return Err(GenesisError::DuplicateAccount(address));
            }
        }

        state
            .accounts
            .iter()
            .map(|descriptor| normalize(descriptor).map_err(GenesisError::FatalConfiguration))
            .collect()
    }
}

impl Default for GenesisValidator {
    fn default() -> Self {
        Self::new(ModuleRegistry::standard())
    }
}

/// Validate with the standard module registry.
pub fn validate_genesis_state(state: &GenesisState) -> Result<(), GenesisError> {
    GenesisValidator::default().validate(state)
}
