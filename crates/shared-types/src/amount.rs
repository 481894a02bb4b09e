//! Serde helpers for integer amounts.
//!
//! `U256` amounts travel as base-10 strings so that documents stay readable
//! and lossless in any JSON consumer.

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(amount)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    let text = String::deserialize(deserializer)?;
    if text.is_empty() {
        return Err(serde::de::Error::custom("empty amount"));
    }
    U256::from_dec_str(&text)
        .map_err(|e| serde::de::Error::custom(format!("invalid amount {:?}: {:?}", text, e)))
}

#[cfg(test)]
mod tests {
    use crate::Coin;

    #[test]
    fn test_rejects_hex_and_negative_amounts() {
        for bad in ["\"0x10\"", "\"-5\"", "\"\"", "12"] {
            let json = format!("{{\"denom\":\"cyb\",\"amount\":{}}}", bad);
            assert!(serde_json::from_str::<Coin>(&json).is_err(), "accepted {}", bad);
        }
    }
}
