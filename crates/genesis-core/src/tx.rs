//! # Bootstrap Transactions
//!
//! The signed envelope a prospective validator submits before the chain
//! starts, and the decoding capability the assembler depends on.
//!
//! Envelopes are JSON. Both the bare form and the type-wrapped form are
//! accepted:
//!
//! ```text
//! {"msg": [...], "fee": {...}, "signatures": [...], "memo": "..."}
//! {"type": "cosmos-sdk/StdTx", "value": {"msg": [...], ...}}
//! ```

use genesis_modules::bank::MsgSend;
use genesis_modules::staking::{MsgCreateValidator, MsgDelegate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use shared_types::Coins;
use thiserror::Error;

pub const MSG_CREATE_VALIDATOR: &str = "cosmos-sdk/MsgCreateValidator";
pub const MSG_DELEGATE: &str = "cosmos-sdk/MsgDelegate";
pub const MSG_SEND: &str = "cosmos-sdk/MsgSend";

/// An undecoded bootstrap transaction, kept verbatim in the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTx(pub Value);

impl RawTx {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Hex SHA-256 of the compact JSON encoding. Used to identify
    /// transactions in logs.
    pub fn hash(&self) -> String {
        let bytes = serde_json::to_vec(&self.0).unwrap_or_default();
        hex::encode(Sha256::digest(&bytes))
    }
}

impl From<Value> for RawTx {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StdFee {
    #[serde(default)]
    pub amount: Coins,
    #[serde(default)]
    pub gas: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: String,
    pub signature: String,
}

/// A standard signed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<Msg>,
    #[serde(default)]
    pub fee: StdFee,
    #[serde(default)]
    pub signatures: Vec<StdSignature>,
    #[serde(default)]
    pub memo: String,
}

/// A transaction instruction.
///
/// Unrecognized kinds decode to [`Msg::Unknown`]: well-formed, but never a
/// create-validator instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaggedMsg", into = "TaggedMsg")]
pub enum Msg {
    CreateValidator(MsgCreateValidator),
    Delegate(MsgDelegate),
    Send(MsgSend),
    Unknown { kind: String, value: Value },
}

impl Msg {
    /// Wire tag of the instruction.
    pub fn kind(&self) -> &str {
        match self {
            Self::CreateValidator(_) => MSG_CREATE_VALIDATOR,
            Self::Delegate(_) => MSG_DELEGATE,
            Self::Send(_) => MSG_SEND,
            Self::Unknown { kind, .. } => kind.as_str(),
        }
    }

    pub fn is_create_validator(&self) -> bool {
        matches!(self, Self::CreateValidator(_))
    }
}

/// `{"type": ..., "value": ...}` wire form of [`Msg`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaggedMsg {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Value,
}

impl TryFrom<TaggedMsg> for Msg {
    type Error = serde_json::Error;

    fn try_from(tagged: TaggedMsg) -> Result<Self, Self::Error> {
        Ok(match tagged.kind.as_str() {
            MSG_CREATE_VALIDATOR => Msg::CreateValidator(serde_json::from_value(tagged.value)?),
            MSG_DELEGATE => Msg::Delegate(serde_json::from_value(tagged.value)?),
            MSG_SEND => Msg::Send(serde_json::from_value(tagged.value)?),
            _ => Msg::Unknown {
                kind: tagged.kind,
                value: tagged.value,
            },
        })
    }
}

impl From<Msg> for TaggedMsg {
    fn from(msg: Msg) -> Self {
        let kind = msg.kind().to_string();
        let value = match msg {
            Msg::CreateValidator(inner) => serde_json::to_value(inner),
            Msg::Delegate(inner) => serde_json::to_value(inner),
            Msg::Send(inner) => serde_json::to_value(inner),
            Msg::Unknown { value, .. } => Ok(value),
        };
        Self {
            kind,
            value: value.unwrap_or(Value::Null),
        }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Transaction decoding errors.
#[derive(Debug, Error)]
pub enum TxDecodeError {
    #[error("transaction envelope is not a JSON object")]
    NotAnObject,

    #[error("malformed transaction envelope: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Turns a raw bootstrap transaction into a [`StdTx`].
///
/// Supplied by the host so the assembler stays independent of the wire
/// encoding.
pub trait TxDecoder: Send + Sync {
    fn decode_tx(&self, raw: &RawTx) -> Result<StdTx, TxDecodeError>;
}

/// Decodes JSON envelopes, bare or type-wrapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTxDecoder;

impl TxDecoder for JsonTxDecoder {
    fn decode_tx(&self, raw: &RawTx) -> Result<StdTx, TxDecodeError> {
        let object = raw.as_value().as_object().ok_or(TxDecodeError::NotAnObject)?;

        let envelope = match (object.get("type"), object.get("value")) {
            (Some(Value::String(_)), Some(inner)) if !object.contains_key("msg") => inner,
            _ => raw.as_value(),
        };
        Ok(StdTx::deserialize(envelope)?)
    }
}
