//! # Core Ledger Primitives
//!
//! Value types every accounting module agrees on.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`
//! - **Balances**: `Coin`, `Coins` (integer amounts)
//! - **Rates & pools**: `DecCoin`, `DecCoins` (decimal amounts)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::{AddressError, CoinError};

// Re-export the numeric types used across all modules
pub use primitive_types::U256;
pub use rust_decimal::Decimal;

/// Length of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

// =============================================================================
// IDENTITY
// =============================================================================

/// A 20-byte account address.
///
/// Rendered as lowercase hex. Parsing accepts an optional `0x` prefix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, SerializeDisplay, DeserializeFromStr,
)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Build an address from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// True for the all-zero address.
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        let raw: [u8; ADDRESS_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// DENOMINATIONS
// =============================================================================

/// Check a denomination against `[a-z][a-z0-9]{2,15}`.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let bytes = denom.as_bytes();
    let well_formed = (3..=16).contains(&bytes.len())
        && bytes[0].is_ascii_lowercase()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

    if !well_formed {
        return Err(CoinError::InvalidDenom(denom.to_string()));
    }
    Ok(())
}

// =============================================================================
// INTEGER COINS
// =============================================================================

/// A single denomination and its non-negative integer amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "crate::amount")]
    pub amount: U256,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<U256>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// A coin is valid when its denomination is legal. Zero amounts are
    /// allowed on a lone coin.
    pub fn validate(&self) -> Result<(), CoinError> {
        validate_denom(&self.denom)
    }

    /// Valid and strictly positive.
    pub fn validate_positive(&self) -> Result<(), CoinError> {
        self.validate()?;
        if self.is_zero() {
            return Err(CoinError::NonPositiveAmount(self.denom.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A balance set: denominations with integer amounts.
///
/// The canonical form is sorted ascending by denomination with no duplicate
/// denominations and no zero entries. Values decoded from a document are kept
/// as written; call [`Coins::sort`] or [`Coins::validate`] to normalize or
/// check them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Empty balance set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a canonical balance set: zero entries are dropped, the rest is
    /// sorted and validated.
    pub fn new(coins: Vec<Coin>) -> Result<Self, CoinError> {
        let mut coins = Self(coins.into_iter().filter(|c| !c.is_zero()).collect());
        coins.sort();
        coins.validate()?;
        Ok(coins)
    }

    /// Wrap coins exactly as given, without normalization.
    pub fn from_raw(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    /// Sort into canonical denomination order.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.denom.cmp(&b.denom));
    }

    /// Consume and return the sorted set.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// True when every amount is zero (including the empty set).
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Coin::is_zero)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    /// Amount held in `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> U256 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or_default()
    }

    /// Check canonical form: legal denominations, positive amounts, strictly
    /// ascending order (which also rules out duplicates).
    pub fn validate(&self) -> Result<(), CoinError> {
        for coin in &self.0 {
            coin.validate_positive()?;
        }
        for pair in self.0.windows(2) {
            match pair[0].denom.cmp(&pair[1].denom) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    return Err(CoinError::DuplicateDenom(pair[1].denom.clone()))
                }
                std::cmp::Ordering::Greater => {
                    return Err(CoinError::Unsorted {
                        previous: pair[0].denom.clone(),
                        next: pair[1].denom.clone(),
                    })
                }
            }
        }
        Ok(())
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self(vec![coin])
    }
}

impl<'a> IntoIterator for &'a Coins {
    type Item = &'a Coin;
    type IntoIter = std::slice::Iter<'a, Coin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Documents written by older tooling carry `null` for empty balance sets.
impl<'de> Deserialize<'de> for Coins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(Option::<Vec<Coin>>::deserialize(deserializer)?.unwrap_or_default()))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Coin::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

// =============================================================================
// DECIMAL COINS
// =============================================================================

/// A denomination with a decimal amount (fee pools, reward accumulators).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Decimal,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Decimal) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// A set of decimal coins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct DecCoins(Vec<DecCoin>);

impl DecCoins {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn from_raw(coins: Vec<DecCoin>) -> Self {
        Self(coins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecCoin> {
        self.0.iter()
    }

    /// First negative entry, if any.
    pub fn first_negative(&self) -> Option<&DecCoin> {
        self.0.iter().find(|c| c.amount.is_sign_negative() && !c.amount.is_zero())
    }

    pub fn is_any_negative(&self) -> bool {
        self.first_negative().is_some()
    }
}

impl<'de> Deserialize<'de> for DecCoins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(Option::<Vec<DecCoin>>::deserialize(deserializer)?.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn coin(denom: &str, amount: u64) -> Coin {
        Coin::new(denom, amount)
    }

    #[test]
    fn test_address_round_trips_through_hex() {
        let addr = Address::new([0xab; ADDRESS_LEN]);
        let text = addr.to_string();
        assert_eq!(text.len(), ADDRESS_LEN * 2);
        assert_eq!(text.parse::<Address>().unwrap(), addr);
        assert_eq!(format!("0x{}", text).parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        let err = "abcd".parse::<Address>().unwrap_err();
        assert!(matches!(
            err,
            AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_address_serializes_as_string() {
        let addr = Address::new([1; ADDRESS_LEN]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", addr));
    }

    #[test]
    fn test_denom_rules() {
        assert!(validate_denom("cyb").is_ok());
        assert!(validate_denom("gcyb2").is_ok());
        assert!(validate_denom("ab").is_err());
        assert!(validate_denom("Cyb").is_err());
        assert!(validate_denom("1cyb").is_err());
        assert!(validate_denom("a".repeat(17).as_str()).is_err());
    }

    #[test]
    fn test_coins_new_sorts_and_drops_zero() {
        let coins = Coins::new(vec![coin("zzz", 1), coin("aaa", 0), coin("cyb", 5)]).unwrap();
        let denoms: Vec<&str> = coins.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, vec!["cyb", "zzz"]);
    }

    #[test]
    fn test_coins_new_rejects_duplicates() {
        let err = Coins::new(vec![coin("cyb", 1), coin("cyb", 2)]).unwrap_err();
        assert!(matches!(err, CoinError::DuplicateDenom(d) if d == "cyb"));
    }

    #[test]
    fn test_coins_validate_detects_unsorted() {
        let coins = Coins::from_raw(vec![coin("zzz", 1), coin("cyb", 1)]);
        assert!(matches!(coins.validate(), Err(CoinError::Unsorted { .. })));
        assert!(coins.sorted().validate().is_ok());
    }

    #[test]
    fn test_coins_is_zero() {
        assert!(Coins::empty().is_zero());
        assert!(Coins::from_raw(vec![coin("cyb", 0)]).is_zero());
        assert!(!Coins::from(coin("cyb", 1)).is_zero());
    }

    #[test]
    fn test_coins_amount_of() {
        let coins = Coins::new(vec![coin("cyb", 7), coin("eul", 3)]).unwrap();
        assert_eq!(coins.amount_of("cyb"), U256::from(7u64));
        assert_eq!(coins.amount_of("missing"), U256::zero());
    }

    #[test]
    fn test_coins_json_uses_decimal_strings() {
        let coins = Coins::from(Coin::new("cyb", U256::from(10u64).pow(U256::from(30u64))));
        let json = serde_json::to_value(&coins).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "denom": "cyb", "amount": "1000000000000000000000000000000" }])
        );
        let back: Coins = serde_json::from_value(json).unwrap();
        assert_eq!(back, coins);
    }

    #[test]
    fn test_coins_null_decodes_as_empty() {
        let coins: Coins = serde_json::from_str("null").unwrap();
        assert!(coins.is_empty());
    }

    #[test]
    fn test_dec_coins_negative_detection() {
        let pool = DecCoins::from_raw(vec![
            DecCoin::new("cyb", dec!(1.5)),
            DecCoin::new("eul", dec!(-0.1)),
        ]);
        assert_eq!(pool.first_negative().map(|c| c.denom.as_str()), Some("eul"));
        assert!(!DecCoins::empty().is_any_negative());
    }
}
