//! Organizer proceeds for a primary ticket tier.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRIMARY_PLATFORM_FEE_BPS;
use crate::split::{FeeSchedule, FeeSplit};
use crate::{Amount, FeeRate, PricingError};

/// Platform fee taken when a ticket is first sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryTerms {
    pub platform_fee: FeeRate,
}

impl Default for PrimaryTerms {
    fn default() -> Self {
        Self {
            platform_fee: FeeRate::from_bps_const(DEFAULT_PRIMARY_PLATFORM_FEE_BPS),
        }
    }
}

impl PrimaryTerms {
    pub fn proceeds(&self, price: Amount) -> Result<TierProceeds, PricingError> {
        tier_proceeds(price, self.platform_fee)
    }
}

/// What the organizer receives for one ticket at a tier price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProceeds {
    pub price: Amount,
    pub platform_fee_rate: FeeRate,
    pub fee_deducted: Amount,
    pub received: Amount,
}

impl TierProceeds {
    pub fn split(&self) -> FeeSplit {
        FeeSplit {
            price: self.price,
            organizer_fee: Amount::ZERO,
            platform_fee: self.fee_deducted,
            net: self.received,
        }
    }
}

/// `received = price * (1 - rate)`, `fee_deducted = price * rate`.
pub fn tier_proceeds(price: Amount, platform_fee: FeeRate) -> Result<TierProceeds, PricingError> {
    let split = FeeSchedule::primary(platform_fee).split(price)?;
    Ok(TierProceeds {
        price,
        platform_fee_rate: platform_fee,
        fee_deducted: split.platform_fee,
        received: split.net,
    })
}
