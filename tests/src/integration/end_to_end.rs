//! End-to-end genesis flows.

#[cfg(test)]
mod tests {
    use genesis_core::{
        normalize, validate_genesis_state, Account, ErrorKind, GenesisAssembler, GenesisError,
        GenesisState, GenesisValidator, JsonTxDecoder, ModuleRegistry, RawTx,
    };
    use genesis_modules::gov::GovError;
    use genesis_modules::wasm::{self, WasmError};
    use genesis_modules::ModuleError;
    use rust_decimal_macros::dec;
    use shared_types::{Coin, Coins};

    use crate::fixtures::*;

    fn assemble(state: &GenesisState, batch: Vec<RawTx>) -> Result<GenesisState, GenesisError> {
        GenesisAssembler::new(JsonTxDecoder).assemble(&document(state), batch)
    }

    // =============================================================================
    // SUCCESS PATHS
    // =============================================================================

    #[test]
    fn test_zero_accounts_one_gentx() {
        let state = GenesisAssembler::new(JsonTxDecoder)
            .assemble(&default_document(), vec![gentx(0)])
            .unwrap();

        assert_eq!(state.gentxs.len(), 1);
        validate_genesis_state(&state).unwrap();
    }

    #[test]
    fn test_mixed_accounts_validate_and_normalize() {
        let mut state = genesis_core::build_default();

        let mut continuous = plain_account(1, 1_000);
        continuous.original_vesting = Coins::from(Coin::new("cyb", 500u64));
        continuous.start_time = 1_700_000_000;
        continuous.end_time = 1_800_000_000;

        let mut delayed = plain_account(2, 1_000);
        delayed.original_vesting = Coins::from(Coin::new("cyb", 500u64));
        delayed.end_time = 1_800_000_000;

        let mut module = plain_account(3, 0);
        module.module_name = "bonded_tokens_pool".to_string();
        module.module_permissions = vec!["burner".to_string(), "staking".to_string()];

        state.accounts = vec![plain_account(0, 10), continuous, delayed, module];

        let assembled = assemble(&state, gentx_batch(3)).unwrap();
        let accounts = GenesisValidator::default()
            .validate_accounts(&assembled)
            .unwrap();
        validate_genesis_state(&assembled).unwrap();

        assert!(matches!(accounts[0], Account::Base(_)));
        assert!(matches!(accounts[1], Account::ContinuousVesting(_)));
        assert!(matches!(accounts[2], Account::DelayedVesting(_)));
        assert!(matches!(accounts[3], Account::Module(_)));
    }

    #[test]
    fn test_assembled_state_survives_reserialization() {
        let batch = gentx_batch(2);
        let json = GenesisAssembler::new(JsonTxDecoder)
            .assemble_json(&default_document(), batch.clone())
            .unwrap();
        let reloaded = GenesisState::from_json(&json).unwrap();
        assert_eq!(reloaded.gentxs, batch);
        validate_genesis_state(&reloaded).unwrap();
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[test]
    fn test_empty_batch_stops_before_validation() {
        let err = GenesisAssembler::new(JsonTxDecoder)
            .assemble(&default_document(), Vec::new())
            .unwrap_err();
        assert!(matches!(err, GenesisError::NoBootstrapTransactions));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_delegate_gentx_rejected() {
        let batch = vec![gentx(0), envelope(vec![delegate_msg(1)])];
        let err = assemble(&genesis_core::build_default(), batch).unwrap_err();
        assert!(matches!(err, GenesisError::NotCreateValidator { index: 1 }));
    }

    #[test]
    fn test_duplicate_account_after_assembly() {
        let mut state = genesis_core::build_default();
        state.accounts = vec![plain_account(7, 1), plain_account(8, 1), plain_account(7, 2)];

        let assembled = assemble(&state, vec![gentx(0)]).unwrap();
        match validate_genesis_state(&assembled) {
            Err(GenesisError::DuplicateAccount(addr)) => assert_eq!(addr, address(7)),
            other => panic!("expected duplicate account, got {:?}", other),
        }
    }

    #[test]
    fn test_fatal_vesting_descriptor() {
        let mut bad = plain_account(4, 100);
        bad.original_vesting = Coins::from(Coin::new("cyb", 100u64));
        bad.start_time = 1_700_000_000;
        assert!(normalize(&bad).is_err());

        let mut state = genesis_core::build_default();
        state.accounts = vec![bad];
        let assembled = assemble(&state, vec![gentx(0)]).unwrap();

        let err = validate_genesis_state(&assembled).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FatalConfiguration);
        assert!(err.to_string().contains(&address(4).to_string()));
    }

    #[test]
    fn test_gov_error_identity_preserved() {
        let mut state = genesis_core::build_default();
        state.gov.tally_params.veto = dec!(0);
        let assembled = assemble(&state, vec![gentx(0)]).unwrap();

        match validate_genesis_state(&assembled) {
            Err(GenesisError::Module(ModuleError::Gov(GovError::VetoOutOfRange(v)))) => {
                assert_eq!(v, dec!(0))
            }
            other => panic!("expected gov veto error, got {:?}", other),
        }
    }

    #[test]
    fn test_wasm_checked_only_when_registered() {
        let mut state = genesis_core::build_default();
        state.wasm.contracts.push(wasm::Contract {
            contract_address: address(9),
            code_id: 42,
            creator: address(1),
            label: "orphan".to_string(),
        });

        assert!(matches!(
            validate_genesis_state(&state),
            Err(GenesisError::Module(ModuleError::Wasm(
                WasmError::UnknownCodeId { code_id: 42, .. }
            )))
        ));

        let without_wasm = GenesisValidator::new(ModuleRegistry::new());
        assert!(without_wasm.validate(&state).is_ok());
    }
}
