//! Pricing configuration.
//!
//! Each call site gets its own rates: resale listings, primary tier sales
//! and organizer withdrawals are configured independently.

use serde::{Deserialize, Serialize};

use crate::{PricingError, PrimaryTerms, ResaleTerms, WithdrawalPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "defaults::resale")]
    pub resale: ResaleTerms,

    #[serde(default = "defaults::primary")]
    pub primary: PrimaryTerms,

    #[serde(default = "defaults::withdrawal")]
    pub withdrawal: WithdrawalPolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            resale: defaults::resale(),
            primary: defaults::primary(),
            withdrawal: defaults::withdrawal(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), PricingError> {
        self.resale.validate()?;
        if self.withdrawal.minimum.is_zero() {
            return Err(PricingError::InvalidInput(
                "Withdrawal minimum must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

mod defaults {
    use crate::{PrimaryTerms, ResaleTerms, WithdrawalPolicy};

    pub fn resale() -> ResaleTerms {
        ResaleTerms::default()
    }

    pub fn primary() -> PrimaryTerms {
        PrimaryTerms::default()
    }

    pub fn withdrawal() -> WithdrawalPolicy {
        WithdrawalPolicy::default()
    }
}
