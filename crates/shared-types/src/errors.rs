//! # Error Types
//!
//! Errors raised while parsing or checking shared primitives.

use thiserror::Error;

/// Errors raised by coin and denomination checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinError {
    /// Denomination does not match `[a-z][a-z0-9]{2,15}`.
    #[error("invalid denomination: {0:?}")]
    InvalidDenom(String),

    /// Coin inside a balance set carries a zero amount.
    #[error("non-positive amount for denomination {0}")]
    NonPositiveAmount(String),

    /// The same denomination appears twice.
    #[error("duplicate denomination {0}")]
    DuplicateDenom(String),

    /// Denominations are not in ascending order.
    #[error("coins not sorted: {previous} must come before {next}")]
    Unsorted { previous: String, next: String },
}

/// Errors raised when parsing an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid address hex: {0}")]
    InvalidHex(String),

    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
