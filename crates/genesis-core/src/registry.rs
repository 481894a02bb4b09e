//! # Module Registry
//!
//! The ordered set of accounting modules whose `validate_genesis` runs over
//! a completed container. Order is data: the validator walks the registry
//! front to back and stops at the first failure.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Standard order used by the node.
//! let registry = ModuleRegistry::standard();
//!
//! // Also check auth, slashing and crisis parameters.
//! let registry = ModuleRegistry::standard().with_param_modules();
//!
//! // Custom registry, e.g. for a chain without contracts.
//! let registry = ModuleRegistry::new()
//!     .with(StateModule::new(staking::MODULE_NAME, |s| &s.staking, staking::validate_genesis))
//!     .with(StateModule::new(mint::MODULE_NAME, |s| &s.mint, mint::validate_genesis));
//! ```

use genesis_modules::{
    auth, bandwidth, bank, crisis, distribution, gov, mint, rank, slashing, staking, supply, wasm,
    ModuleError,
};
use tracing::warn;

use crate::state::GenesisState;

/// An accounting module as seen by the genesis validator.
pub trait GenesisModule: Send + Sync {
    /// Module name, unique within a registry.
    fn name(&self) -> &'static str;

    /// Check this module's sub-state of `state`.
    fn validate_genesis(&self, state: &GenesisState) -> Result<(), ModuleError>;
}

/// Adapter binding a sub-state selector to the module's own validation
/// function.
pub struct StateModule<S: 'static, E> {
    name: &'static str,
    select: fn(&GenesisState) -> &S,
    validate: fn(&S) -> Result<(), E>,
}

impl<S: 'static, E> StateModule<S, E> {
    pub fn new(
        name: &'static str,
        select: fn(&GenesisState) -> &S,
        validate: fn(&S) -> Result<(), E>,
    ) -> Self {
        Self {
            name,
            select,
            validate,
        }
    }
}

impl<S: 'static, E> GenesisModule for StateModule<S, E>
where
    E: Into<ModuleError> + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn validate_genesis(&self, state: &GenesisState) -> Result<(), ModuleError> {
        (self.validate)((self.select)(state)).map_err(Into::into)
    }
}

/// Ordered collection of [`GenesisModule`]s.
pub struct ModuleRegistry {
    modules: Vec<Box<dyn GenesisModule>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// The accounting modules the node checks at genesis, in order.
    pub fn standard() -> Self {
        Self::new()
            .with(StateModule::new(
                staking::MODULE_NAME,
                |s| &s.staking,
                staking::validate_genesis,
            ))
            .with(StateModule::new(
                mint::MODULE_NAME,
                |s| &s.mint,
                mint::validate_genesis,
            ))
            .with(StateModule::new(
                distribution::MODULE_NAME,
                |s| &s.distribution,
                distribution::validate_genesis,
            ))
            .with(StateModule::new(
                gov::MODULE_NAME,
                |s| &s.gov,
                gov::validate_genesis,
            ))
            .with(StateModule::new(
                bank::MODULE_NAME,
                |s| &s.bank,
                bank::validate_genesis,
            ))
            .with(StateModule::new(
                supply::MODULE_NAME,
                |s| &s.supply,
                supply::validate_genesis,
            ))
            .with(StateModule::new(
                bandwidth::MODULE_NAME,
                |s| &s.bandwidth,
                bandwidth::validate_genesis,
            ))
            .with(StateModule::new(
                rank::MODULE_NAME,
                |s| &s.rank,
                rank::validate_genesis,
            ))
            .with(StateModule::new(
                wasm::MODULE_NAME,
                |s| &s.wasm,
                wasm::validate_genesis,
            ))
    }

    /// Append the parameter-only modules the node does not check at
    /// genesis: auth, slashing and crisis.
    pub fn with_param_modules(self) -> Self {
        self.with(StateModule::new(
            auth::MODULE_NAME,
            |s| &s.auth,
            auth::validate_genesis,
        ))
        .with(StateModule::new(
            slashing::MODULE_NAME,
            |s| &s.slashing,
            slashing::validate_genesis,
        ))
        .with(StateModule::new(
            crisis::MODULE_NAME,
            |s| &s.crisis,
            crisis::validate_genesis,
        ))
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, module: impl GenesisModule + 'static) -> Self {
        self.register(Box::new(module));
        self
    }

    /// Append a module. A module with the same name is replaced in place,
    /// keeping its position.
    pub fn register(&mut self, module: Box<dyn GenesisModule>) {
        match self.modules.iter().position(|m| m.name() == module.name()) {
            Some(index) => {
                warn!(
                    module = module.name(),
                    "Module already registered, replacing"
                );
                self.modules[index] = module;
            }
            None => self.modules.push(module),
        }
    }

    /// Module names in validation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GenesisModule> {
        self.modules.iter().map(|m| m.as_ref())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting(&'static str);

    impl GenesisModule for Rejecting {
        fn name(&self) -> &'static str {
            self.0
        }

        fn validate_genesis(&self, _state: &GenesisState) -> Result<(), ModuleError> {
            Err(staking::StakingError::ZeroMaxEntries.into())
        }
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            ModuleRegistry::standard().names(),
            vec![
                "staking",
                "mint",
                "distribution",
                "gov",
                "bank",
                "supply",
                "bandwidth",
                "rank",
                "wasm"
            ]
        );
    }

    #[test]
    fn test_param_modules_appended_after_standard() {
        let names = ModuleRegistry::standard().with_param_modules().names();
        assert_eq!(names.len(), 12);
        assert_eq!(&names[9..], &["auth", "slashing", "crisis"]);
    }

    #[test]
    fn test_zero_auth_costs_pass_standard_registry() {
        let mut state = crate::defaults::build_default();
        state.auth.params.tx_size_cost_per_byte = 0;
        state.auth.params.sig_verify_cost_ed25519 = 0;
        state.auth.params.sig_verify_cost_secp256k1 = 0;

        assert!(ModuleRegistry::standard()
            .iter()
            .all(|m| m.validate_genesis(&state).is_ok()));

        let failing: Vec<_> = ModuleRegistry::standard()
            .with_param_modules()
            .iter()
            .filter(|m| m.validate_genesis(&state).is_err())
            .map(|m| m.name())
            .collect();
        assert_eq!(failing, vec!["auth"]);
    }

    #[test]
    fn test_register_replaces_in_place() {
        let registry = ModuleRegistry::standard().with(Rejecting("mint"));
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.names()[1], "mint");

        let state = crate::defaults::build_default();
        let failing: Vec<_> = registry
            .iter()
            .filter(|m| m.validate_genesis(&state).is_err())
            .map(|m| m.name())
            .collect();
        assert_eq!(failing, vec!["mint"]);
    }

    #[test]
    fn test_new_is_empty() {
        assert!(ModuleRegistry::new().is_empty());
        assert!(ModuleRegistry::default().is_empty());
    }
}
