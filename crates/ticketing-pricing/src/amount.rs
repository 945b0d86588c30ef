//! Fixed-point IDRX amounts.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{AMOUNT_DECIMALS, AMOUNT_SCALE, CURRENCY_SYMBOL, DISPLAY_DECIMALS};
use crate::PricingError;

/// Non-negative IDRX amount held as integer micro-units (`AMOUNT_SCALE` per IDRX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn from_micros(micros: u128) -> Self {
        Self(micros)
    }

    pub const fn from_whole(whole: u64) -> Self {
        Self(whole as u128 * AMOUNT_SCALE)
    }

    pub const fn as_micros(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parses a plain decimal such as `495`, `12.375` or `0.5`.
    /// Signs, exponents and more than six fractional digits are rejected.
    pub fn parse(raw: &str) -> Result<Self, PricingError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(PricingError::invalid_amount(raw, "empty"));
        }
        if text.starts_with('-') {
            return Err(PricingError::invalid_amount(raw, "negative amounts are not allowed"));
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };
        if whole.is_empty() || (text.contains('.') && fraction.is_empty()) {
            return Err(PricingError::invalid_amount(raw, "expected digits on both sides of '.'"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PricingError::invalid_amount(raw, "not a decimal number"));
        }
        if fraction.len() > AMOUNT_DECIMALS {
            return Err(PricingError::invalid_amount(
                raw,
                &format!("at most {} decimal places", AMOUNT_DECIMALS),
            ));
        }

        let whole_units: u128 = whole
            .parse()
            .map_err(|_| PricingError::invalid_amount(raw, "too large"))?;
        let fraction_units: u128 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", fraction, width = AMOUNT_DECIMALS);
            padded
                .parse()
                .map_err(|_| PricingError::invalid_amount(raw, "not a decimal number"))?
        };

        whole_units
            .checked_mul(AMOUNT_SCALE)
            .and_then(|micros| micros.checked_add(fraction_units))
            .map(Self)
            .ok_or_else(|| PricingError::invalid_amount(raw, "too large"))
    }

    /// Converts a float as typed into a numeric input field.
    pub fn from_f64(value: f64) -> Result<Self, PricingError> {
        if !value.is_finite() || value < 0.0 {
            return Err(PricingError::invalid_amount(
                &value.to_string(),
                "must be a finite, non-negative number",
            ));
        }
        Self::parse(&value.to_string())
    }

    /// Exact value with trailing zeros trimmed (`12.375`, `500`).
    pub fn to_decimal_string(self) -> String {
        let whole = self.0 / AMOUNT_SCALE;
        let fraction = self.0 % AMOUNT_SCALE;
        if fraction == 0 {
            return whole.to_string();
        }
        let digits = format!("{:0width$}", fraction, width = AMOUNT_DECIMALS);
        format!("{}.{}", whole, digits.trim_end_matches('0'))
    }

    /// Display form with the currency label (`12.38 IDRX`).
    pub fn to_idrx_string(self) -> String {
        format!("{} {}", self, CURRENCY_SYMBOL)
    }

    /// Value in display units (hundredths), rounded half up.
    fn display_units(self) -> u128 {
        let step = AMOUNT_SCALE / 10u128.pow(DISPLAY_DECIMALS);
        let units = self.0 / step;
        if self.0 % step >= step / 2 {
            units + 1
        } else {
            units
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10u128.pow(DISPLAY_DECIMALS);
        let units = self.display_units();
        write!(
            f,
            "{}.{:0width$}",
            units / divisor,
            units % divisor,
            width = DISPLAY_DECIMALS as usize
        )
    }
}

impl FromStr for Amount {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative decimal amount")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                Amount::parse(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
                Ok(Amount::from_whole(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
                u64::try_from(v)
                    .map(Amount::from_whole)
                    .map_err(|_| E::custom("negative amounts are not allowed"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
                Amount::from_f64(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
