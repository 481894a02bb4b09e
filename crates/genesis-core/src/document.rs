//! # Genesis Document
//!
//! The file every node of a new network starts from. Only `app_state` is
//! interpreted here; chain metadata is carried through verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::GenesisState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisDoc {
    pub genesis_time: DateTime<Utc>,
    pub chain_id: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub consensus_params: Value,
    #[serde(default)]
    pub validators: Vec<Value>,
    #[serde(default)]
    pub app_hash: String,
    /// Serialized [`GenesisState`].
    #[serde(default)]
    pub app_state: Value,
}

impl GenesisDoc {
    /// Wrap a container into a fresh document.
    pub fn new(
        chain_id: impl Into<String>,
        genesis_time: DateTime<Utc>,
        state: &GenesisState,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            genesis_time,
            chain_id: chain_id.into(),
            consensus_params: Value::Null,
            validators: Vec::new(),
            app_hash: String::new(),
            app_state: state.to_json()?,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
