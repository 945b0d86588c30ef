//! Organizer balance withdrawals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_MIN_WITHDRAWAL_IDRX, DEFAULT_WITHDRAWAL_FEE_BPS};
use crate::split::{FeeSchedule, FeeSplit};
use crate::{Amount, FeeRate, PricingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithdrawalPolicy {
    /// Platform cut of the withdrawn amount (1% by default).
    pub fee: FeeRate,
    pub minimum: Amount,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            fee: FeeRate::from_bps_const(DEFAULT_WITHDRAWAL_FEE_BPS),
            minimum: Amount::from_whole(DEFAULT_MIN_WITHDRAWAL_IDRX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalQuote {
    pub amount: Amount,
    pub fee: Amount,
    pub net: Amount,
    /// Balance left after the withdrawal.
    pub remaining_balance: Amount,
}

impl WithdrawalQuote {
    pub fn split(&self) -> FeeSplit {
        FeeSplit {
            price: self.amount,
            organizer_fee: Amount::ZERO,
            platform_fee: self.fee,
            net: self.net,
        }
    }
}

impl WithdrawalPolicy {
    pub fn quote(&self, amount: Amount, available: Amount) -> Result<WithdrawalQuote, PricingError> {
        if amount < self.minimum {
            return Err(PricingError::BelowMinimum {
                amount,
                minimum: self.minimum,
            });
        }
        let Some(remaining_balance) = available.checked_sub(amount) else {
            return Err(PricingError::InsufficientBalance { amount, available });
        };

        let split = FeeSchedule::primary(self.fee).split(amount)?;
        debug!(amount = %amount, fee = %split.platform_fee, net = %split.net, "withdrawal quote computed");

        Ok(WithdrawalQuote {
            amount,
            fee: split.platform_fee,
            net: split.net,
            remaining_balance,
        })
    }
}
