//! # Genesis Assembler
//!
//! Merges a genesis document with the bootstrap transaction batch.
//!
//! ## Steps
//!
//! 1. Decode the container from `app_state`.
//! 2. Reject an empty batch.
//! 3. Decode every transaction and require exactly one create-validator
//!    message in each.
//! 4. Attach the batch, in order, to `gentxs`.
//!
//! Signatures are not verified and nothing is executed: that happens when
//! the chain replays `gentxs` at height zero.

use tracing::{debug, info};

use crate::document::GenesisDoc;
use crate::error::GenesisError;
use crate::state::GenesisState;
use crate::tx::{RawTx, TxDecoder};

pub struct GenesisAssembler<D> {
    decoder: D,
}

impl<D: TxDecoder> GenesisAssembler<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Produce the assembled container, or the first error.
    pub fn assemble(
        &self,
        doc: &GenesisDoc,
        batch: Vec<RawTx>,
    ) -> Result<GenesisState, GenesisError> {
        let mut state =
            GenesisState::from_json(&doc.app_state).map_err(GenesisError::AppStateDecode)?;

        if batch.is_empty() {
            return Err(GenesisError::NoBootstrapTransactions);
        }

        for (index, raw) in batch.iter().enumerate() {
            self.check_bootstrap_tx(index, raw)?;
        }

        info!(
            chain_id = %doc.chain_id,
            gentxs = batch.len(),
            accounts = state.accounts.len(),
            "Genesis state assembled"
        );

        state.gentxs = batch;
        Ok(state)
    }

    /// [`assemble`](Self::assemble), serialized for writing back into a
    /// document.
    pub fn assemble_json(
        &self,
        doc: &GenesisDoc,
        batch: Vec<RawTx>,
    ) -> Result<serde_json::Value, GenesisError> {
        self.assemble(doc, batch)?
            .to_json()
            .map_err(GenesisError::AppStateEncode)
    }

    fn check_bootstrap_tx(&self, index: usize, raw: &RawTx) -> Result<(), GenesisError> {
        let tx = self
            .decoder
            .decode_tx(raw)
            .map_err(|source| GenesisError::TxDecode { index, source })?;

        if tx.msg.len() != 1 {
            return Err(GenesisError::InvalidMessageCount {
                index,
                count: tx.msg.len(),
            });
        }
        if !tx.msg[0].is_create_validator() {
            return Err(GenesisError::NotCreateValidator { index });
        }

        debug!(index, tx_hash = %raw.hash(), "Accepted bootstrap transaction");
        Ok(())
    }
}
