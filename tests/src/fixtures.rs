//! Shared builders for documents, accounts and bootstrap transactions.

use chrono::{TimeZone, Utc};
use genesis_core::tx::{MSG_CREATE_VALIDATOR, MSG_DELEGATE};
use genesis_core::{build_default, GenesisAccount, GenesisDoc, GenesisState, RawTx};
use serde_json::{json, Value};
use shared_types::{Address, Coin, Coins};

pub const CHAIN_ID: &str = "cyber-testnet";

/// Deterministic address derived from `n`.
pub fn address(n: u32) -> Address {
    let mut bytes = [0u8; 20];
    bytes[16..].copy_from_slice(&n.to_be_bytes());
    Address::new(bytes)
}

pub fn plain_account(n: u32, amount: u64) -> GenesisAccount {
    GenesisAccount::new(address(n), Coins::from(Coin::new("cyb", amount)))
}

/// Wrap `state` into a document with a fixed genesis time.
pub fn document(state: &GenesisState) -> GenesisDoc {
    let time = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    GenesisDoc::new(CHAIN_ID, time, state).expect("genesis state serializes")
}

/// Zero-account document built from the defaults.
pub fn default_document() -> GenesisDoc {
    document(&build_default())
}

pub fn create_validator_msg(n: u32) -> Value {
    json!({
        "type": MSG_CREATE_VALIDATOR,
        "value": {
            "description": {"moniker": format!("validator-{}", n)},
            "commission": {"rate": "0.1", "max_rate": "0.2", "max_change_rate": "0.01"},
            "min_self_delegation": "1",
            "delegator_address": address(n).to_string(),
            "validator_address": address(n).to_string(),
            "pubkey": format!("cybervalconspub-{}", n),
            "value": {"denom": "cyb", "amount": "1000000"}
        }
    })
}

pub fn delegate_msg(n: u32) -> Value {
    json!({
        "type": MSG_DELEGATE,
        "value": {
            "delegator_address": address(n).to_string(),
            "validator_address": address(n + 1).to_string(),
            "amount": {"denom": "cyb", "amount": "10"}
        }
    })
}

/// Signed envelope carrying `msgs`, in the type-wrapped wire form.
pub fn envelope(msgs: Vec<Value>) -> RawTx {
    RawTx::new(json!({
        "type": "cosmos-sdk/StdTx",
        "value": {
            "msg": msgs,
            "fee": {"amount": [], "gas": 200000},
            "signatures": [{"pub_key": "pk", "signature": "sig"}],
            "memo": ""
        }
    }))
}

/// A well-formed bootstrap transaction for validator `n`.
pub fn gentx(n: u32) -> RawTx {
    envelope(vec![create_validator_msg(n)])
}

pub fn gentx_batch(count: u32) -> Vec<RawTx> {
    (0..count).map(gentx).collect()
}
