//! Range checks for decimal ratios.

use rust_decimal::Decimal;

/// `0 <= value <= 1`
pub fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

/// `0 < value <= 1`
pub fn is_positive_fraction(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= Decimal::ONE
}

/// `0 < value < 1`
pub fn is_open_fraction(value: Decimal) -> bool {
    value > Decimal::ZERO && value < Decimal::ONE
}
