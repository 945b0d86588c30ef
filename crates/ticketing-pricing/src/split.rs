//! Fee split calculation shared by resale listings, ticket tiers and withdrawals.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::BASIS_POINTS;
use crate::markup::{PriceBand, markup_percentage};
use crate::{Amount, FeeRate, PricingError};

/// Rates applied to one price. Each call site injects its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub organizer: FeeRate,
    pub platform: FeeRate,
}

impl FeeSchedule {
    pub const fn new(organizer: FeeRate, platform: FeeRate) -> Self {
        Self {
            organizer,
            platform,
        }
    }

    /// Primary sales and withdrawals carry no organizer cut.
    pub const fn primary(platform: FeeRate) -> Self {
        Self::new(FeeRate::ZERO, platform)
    }

    pub const fn total_bps(&self) -> u32 {
        self.organizer.bps() + self.platform.bps()
    }

    /// Splits `price` into organizer fee, platform fee and seller net.
    ///
    /// Fee amounts truncate to the micro-unit; the seller keeps the residue,
    /// so the three parts always add back up to `price`. A schedule whose
    /// rates sum above 100% is refused even for a zero price.
    pub fn split(&self, price: Amount) -> Result<FeeSplit, PricingError> {
        let organizer_fee = self.organizer.of(price)?;
        let platform_fee = self.platform.of(price)?;
        let total_fee = organizer_fee
            .checked_add(platform_fee)
            .ok_or_else(|| PricingError::overflow("total fee"))?;

        let net = match price.checked_sub(total_fee) {
            Some(net) if self.total_bps() <= BASIS_POINTS => net,
            _ => {
                let shortfall = total_fee.saturating_sub(price);
                warn!(
                    price = %price,
                    total_fee = %total_fee,
                    shortfall = %shortfall,
                    total_bps = self.total_bps(),
                    "fees exceed price"
                );
                return Err(PricingError::FeesExceedPrice {
                    price,
                    total_fee,
                    shortfall,
                });
            }
        };

        Ok(FeeSplit {
            price,
            organizer_fee,
            platform_fee,
            net,
        })
    }
}

/// Where one price goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeSplit {
    pub price: Amount,
    pub organizer_fee: Amount,
    pub platform_fee: Amount,
    pub net: Amount,
}

impl FeeSplit {
    pub fn total_fee(&self) -> Amount {
        Amount::from_micros(
            self.organizer_fee
                .as_micros()
                .saturating_add(self.platform_fee.as_micros()),
        )
    }
}

/// Fee breakdown shown when a ticket holder lists a ticket for resale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResaleQuote {
    pub listing_price: Amount,
    pub original_price: Amount,
    pub organizer_fee_rate: FeeRate,
    pub platform_fee_rate: FeeRate,
    pub organizer_fee_amount: Amount,
    pub platform_fee_amount: Amount,
    pub net_seller_amount: Amount,
    /// Listing price as a whole percentage of the original price.
    pub markup_percentage: u64,
}

impl ResaleQuote {
    pub fn split(&self) -> FeeSplit {
        FeeSplit {
            price: self.listing_price,
            organizer_fee: self.organizer_fee_amount,
            platform_fee: self.platform_fee_amount,
            net: self.net_seller_amount,
        }
    }

    pub fn price_band(&self) -> PriceBand {
        PriceBand::from_percentage(self.markup_percentage)
    }
}

/// Organizer fee, platform fee, seller net and markup for a resale listing.
pub fn compute_fee_split(
    listing_price: Amount,
    organizer_fee: FeeRate,
    platform_fee: FeeRate,
    original_price: Amount,
) -> Result<ResaleQuote, PricingError> {
    let markup = markup_percentage(listing_price, original_price)?;
    let split = FeeSchedule::new(organizer_fee, platform_fee).split(listing_price)?;

    debug!(
        listing = %listing_price,
        original = %original_price,
        organizer_fee = %split.organizer_fee,
        platform_fee = %split.platform_fee,
        net = %split.net,
        markup,
        "resale quote computed"
    );

    Ok(ResaleQuote {
        listing_price,
        original_price,
        organizer_fee_rate: organizer_fee,
        platform_fee_rate: platform_fee,
        organizer_fee_amount: split.organizer_fee,
        platform_fee_amount: split.platform_fee,
        net_seller_amount: split.net,
        markup_percentage: markup,
    })
}
