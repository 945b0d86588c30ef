//! Listing price relative to the original issuance price.

use serde::{Deserialize, Serialize};

use crate::math::mul_div_round;
use crate::{Amount, PricingError};

/// `round(listing / original * 100)`, halves rounded up.
pub fn markup_percentage(listing: Amount, original: Amount) -> Result<u64, PricingError> {
    if original.is_zero() {
        return Err(PricingError::zero_original_price());
    }
    let percent = mul_div_round(listing.as_micros(), 100, original.as_micros())
        .ok_or_else(|| PricingError::overflow("markup percentage"))?;
    u64::try_from(percent).map_err(|_| PricingError::overflow("markup percentage"))
}

/// Badge shown next to a resale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBand {
    /// Below the original price.
    Original,
    /// At or above the original price.
    Markup,
}

impl PriceBand {
    pub fn from_percentage(percent: u64) -> Self {
        if percent < 100 {
            Self::Original
        } else {
            Self::Markup
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Markup => "Markup",
        }
    }
}

/// Fill width for the price bar; never past the end of the track.
pub fn bar_fill_percentage(percent: u64) -> u64 {
    percent.min(100)
}
