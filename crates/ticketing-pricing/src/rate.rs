//! Percentage rates held as basis points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::BASIS_POINTS;
use crate::math::mul_div;
use crate::{Amount, PricingError};

/// A proportional cut between 0% and 100%, in basis points (250 = 2.5%).
///
/// Configuration and CLI input express rates as percent numbers; the
/// serde form is that percent number as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FeeRate(u32);

impl FeeRate {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(BASIS_POINTS);

    /// For compile-time constants known to be within range.
    pub(crate) const fn from_bps_const(bps: u32) -> Self {
        Self(bps)
    }

    pub fn from_bps(bps: u32) -> Result<Self, PricingError> {
        if bps > BASIS_POINTS {
            return Err(PricingError::invalid_rate(format!(
                "{} bps is above 100%",
                bps
            )));
        }
        Ok(Self(bps))
    }

    pub fn from_percent(percent: f64) -> Result<Self, PricingError> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(PricingError::invalid_rate(format!(
                "{} is not a non-negative number",
                percent
            )));
        }
        let scaled = percent * 100.0;
        let bps = scaled.round();
        if (scaled - bps).abs() > 1e-6 {
            return Err(PricingError::invalid_rate(format!(
                "{}% is finer than 0.01%",
                percent
            )));
        }
        if bps > BASIS_POINTS as f64 {
            return Err(PricingError::invalid_rate(format!("{}% is above 100%", percent)));
        }
        Ok(Self(bps as u32))
    }

    pub const fn bps(self) -> u32 {
        self.0
    }

    pub fn as_percent(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// The cut this rate takes from `amount`, truncated to the micro-unit.
    pub fn of(self, amount: Amount) -> Result<Amount, PricingError> {
        mul_div(amount.as_micros(), self.0 as u128, BASIS_POINTS as u128)
            .map(Amount::from_micros)
            .ok_or_else(|| PricingError::overflow("fee amount"))
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let fraction = self.0 % 100;
        match fraction {
            0 => write!(f, "{}%", whole),
            n if n % 10 == 0 => write!(f, "{}.{}%", whole, n / 10),
            n => write!(f, "{}.{:02}%", whole, n),
        }
    }
}

impl FromStr for FeeRate {
    type Err = PricingError;

    /// Accepts `2.5` or `2.5%`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let percent: f64 = number
            .parse()
            .map_err(|_| PricingError::invalid_rate(format!("'{}' is not a percentage", s)))?;
        Self::from_percent(percent)
    }
}

impl TryFrom<f64> for FeeRate {
    type Error = PricingError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::from_percent(percent)
    }
}

impl From<FeeRate> for f64 {
    fn from(rate: FeeRate) -> Self {
        rate.as_percent()
    }
}
