//! Widened integer helpers for proportional splits.

use primitive_types::U256;

/// `value * numerator / denominator`, truncated toward zero.
/// `None` when `denominator` is zero or the quotient leaves `u128`.
pub(crate) fn mul_div(value: u128, numerator: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = U256::from(value) * U256::from(numerator) / U256::from(denominator);
    narrow(quotient)
}

/// Like `mul_div`, rounding halves up.
pub(crate) fn mul_div_round(value: u128, numerator: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let doubled = (U256::from(value) * U256::from(numerator)).checked_mul(U256::from(2u8))?;
    let quotient = doubled.checked_add(U256::from(denominator))?
        / (U256::from(denominator) * U256::from(2u8));
    narrow(quotient)
}

fn narrow(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.as_u128())
    }
}
