//! Bootstrap batch properties.

use genesis_core::{GenesisAssembler, GenesisError, JsonTxDecoder};
use proptest::prelude::*;
use serde_json::json;

use crate::fixtures::{create_validator_msg, default_document, envelope, gentx, gentx_batch};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// N good transactions assemble into exactly N gentxs, in order.
    #[test]
    fn prop_batch_preserved_in_order(count in 1u32..12) {
        let batch = gentx_batch(count);
        let state = GenesisAssembler::new(JsonTxDecoder)
            .assemble(&default_document(), batch.clone())
            .unwrap();
        prop_assert_eq!(state.gentxs.len(), count as usize);
        prop_assert_eq!(state.gentxs, batch);
    }

    /// A malformed transaction anywhere in the batch is reported at its index.
    #[test]
    fn prop_malformed_tx_index(count in 1u32..8, bad in 0u32..8) {
        let bad = bad % count;
        let mut batch = gentx_batch(count);
        batch[bad as usize] = genesis_core::RawTx::new(json!({"msg": "oops"}));

        let err = GenesisAssembler::new(JsonTxDecoder)
            .assemble(&default_document(), batch)
            .unwrap_err();
        prop_assert!(
            matches!(err, GenesisError::TxDecode { index, .. } if index == bad as usize),
            "got {:?}", err
        );
    }

    /// Any message count other than one is rejected.
    #[test]
    fn prop_message_count(msgs in 0usize..5) {
        prop_assume!(msgs != 1);
        let tx = envelope((0..msgs as u32).map(create_validator_msg).collect());

        let err = GenesisAssembler::new(JsonTxDecoder)
            .assemble(&default_document(), vec![gentx(0), tx])
            .unwrap_err();
        prop_assert!(
            matches!(err, GenesisError::InvalidMessageCount { index: 1, count } if count == msgs),
            "got {:?}", err
        );
    }
}
