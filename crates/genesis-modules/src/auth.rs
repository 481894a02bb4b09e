//! # Auth
//!
//! Transaction limits and signature verification gas costs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODULE_NAME: &str = "auth";

/// Auth validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("auth parameter {0} must be positive")]
    NonPositiveParam(&'static str),
}

/// Auth parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub max_memo_characters: u64,
    pub tx_sig_limit: u64,
    pub tx_size_cost_per_byte: u64,
    pub sig_verify_cost_ed25519: u64,
    pub sig_verify_cost_secp256k1: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_memo_characters: 256,
            tx_sig_limit: 7,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_ed25519: 590,
            sig_verify_cost_secp256k1: 1000,
        }
    }
}

/// Auth genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
}

/// Validate the auth sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), AuthError> {
    let params = &state.params;
    let checks = [
        ("max_memo_characters", params.max_memo_characters),
        ("tx_sig_limit", params.tx_sig_limit),
        ("tx_size_cost_per_byte", params.tx_size_cost_per_byte),
        ("sig_verify_cost_ed25519", params.sig_verify_cost_ed25519),
        ("sig_verify_cost_secp256k1", params.sig_verify_cost_secp256k1),
    ];
    match checks.into_iter().find(|&(_, value)| value == 0) {
        Some((name, _)) => Err(AuthError::NonPositiveParam(name)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(validate_genesis(&GenesisState::default()), Ok(()));
    }

    #[test]
    fn test_zero_param_is_named() {
        let mut state = GenesisState::default();
        state.params.tx_sig_limit = 0;
        let err = validate_genesis(&state).unwrap_err();
        assert_eq!(err, AuthError::NonPositiveParam("tx_sig_limit"));
        assert_eq!(err.to_string(), "auth parameter tx_sig_limit must be positive");
    }
}
