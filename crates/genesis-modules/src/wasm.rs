//! # Wasm
//!
//! Smart contract layer: uploaded code and instantiated contracts.
//!
//! A fresh network starts with no code. Exported states carry both, and the
//! checks below keep the references between them intact.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::Address;
use thiserror::Error;

pub const MODULE_NAME: &str = "wasm";

/// Wasm validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WasmError {
    #[error("code id must be non-zero")]
    ZeroCodeId,

    #[error("duplicate code id {0}")]
    DuplicateCodeId(u64),

    #[error("code {0} has an empty code hash")]
    EmptyCodeHash(u64),

    #[error("duplicate contract address {0}")]
    DuplicateContract(Address),

    #[error("contract {contract} references unknown code id {code_id}")]
    UnknownCodeId { contract: Address, code_id: u64 },
}

/// Metadata of uploaded contract code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub code_id: u64,
    pub creator: Address,
    /// Hex digest of the wasm blob.
    pub code_hash: String,
}

/// An instantiated contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_address: Address,
    pub code_id: u64,
    pub creator: Address,
    #[serde(default)]
    pub label: String,
}

/// Auto-increment counter persisted across export/import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub id_key: String,
    pub value: u64,
}

/// Wasm genesis sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub codes: Vec<Code>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub sequences: Vec<Sequence>,
}

/// Validate the wasm sub-state.
pub fn validate_genesis(state: &GenesisState) -> Result<(), WasmError> {
    let mut code_ids = HashSet::with_capacity(state.codes.len());
    for code in &state.codes {
        if code.code_id == 0 {
            return Err(WasmError::ZeroCodeId);
        }
        if !code_ids.insert(code.code_id) {
            return Err(WasmError::DuplicateCodeId(code.code_id));
        }
        if code.code_hash.is_empty() {
            return Err(WasmError::EmptyCodeHash(code.code_id));
        }
    }

    let mut contracts = HashSet::with_capacity(state.contracts.len());
    for contract in &state.contracts {
        if !contracts.insert(contract.contract_address) {
            return Err(WasmError::DuplicateContract(contract.contract_address));
        }
        if !code_ids.contains(&contract.code_id) {
            return Err(WasmError::UnknownCodeId {
                contract: contract.contract_address,
                code_id: contract.code_id,
            });
        }
    }
    Ok(())
}
