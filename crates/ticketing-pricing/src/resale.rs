//! Organizer resale terms: fee rates and the markup ceiling.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASIS_POINTS, DEFAULT_MAX_MARKUP_BPS, DEFAULT_ORGANIZER_FEE_BPS,
    DEFAULT_RESALE_PLATFORM_FEE_BPS, MAX_ORGANIZER_FEE_BPS,
};
use crate::math::mul_div;
use crate::split::{FeeSchedule, ResaleQuote, compute_fee_split};
use crate::{Amount, FeeRate, PricingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResaleTerms {
    /// Organizer cut of each resale (2.5% by default).
    pub organizer_fee: FeeRate,
    /// Platform cut of each resale (3% by default).
    pub platform_fee: FeeRate,
    /// How far above the original price a ticket may be listed (20% by default).
    pub max_markup: FeeRate,
}

impl Default for ResaleTerms {
    fn default() -> Self {
        Self {
            organizer_fee: FeeRate::from_bps_const(DEFAULT_ORGANIZER_FEE_BPS),
            platform_fee: FeeRate::from_bps_const(DEFAULT_RESALE_PLATFORM_FEE_BPS),
            max_markup: FeeRate::from_bps_const(DEFAULT_MAX_MARKUP_BPS),
        }
    }
}

impl ResaleTerms {
    pub fn schedule(&self) -> FeeSchedule {
        FeeSchedule::new(self.organizer_fee, self.platform_fee)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.organizer_fee.bps() > MAX_ORGANIZER_FEE_BPS {
            return Err(PricingError::InvalidInput(format!(
                "Organizer fee {} exceeds the {} cap",
                self.organizer_fee,
                FeeRate::from_bps_const(MAX_ORGANIZER_FEE_BPS)
            )));
        }
        if self.schedule().total_bps() > BASIS_POINTS {
            return Err(PricingError::InvalidInput(format!(
                "Organizer fee {} plus platform fee {} exceeds 100%",
                self.organizer_fee, self.platform_fee
            )));
        }
        Ok(())
    }

    /// Highest listing price allowed for a ticket issued at `original`.
    pub fn max_listing_price(&self, original: Amount) -> Result<Amount, PricingError> {
        let ceiling_bps = (BASIS_POINTS + self.max_markup.bps()) as u128;
        mul_div(original.as_micros(), ceiling_bps, BASIS_POINTS as u128)
            .map(Amount::from_micros)
            .ok_or_else(|| PricingError::overflow("maximum listing price"))
    }

    pub fn check_listing(&self, original: Amount, listing: Amount) -> Result<(), PricingError> {
        if original.is_zero() {
            return Err(PricingError::zero_original_price());
        }
        let max_allowed = self.max_listing_price(original)?;
        if listing > max_allowed {
            return Err(PricingError::MarkupExceedsCap {
                listing,
                max_allowed,
            });
        }
        Ok(())
    }

    /// Fee breakdown for a listing that respects the markup ceiling.
    pub fn quote(&self, listing: Amount, original: Amount) -> Result<ResaleQuote, PricingError> {
        self.check_listing(original, listing)?;
        compute_fee_split(listing, self.organizer_fee, self.platform_fee, original)
    }
}
