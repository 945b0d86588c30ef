//! Typed errors for pricing computations.
//!
//! Every calculator returns `Result<_, PricingError>` instead of letting a
//! degenerate figure (negative payout, division by zero) reach a caller.

use crate::Amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Malformed or out-of-range input (unparseable amount, zero original price, ...).
    InvalidInput(String),
    /// Combined fees are larger than the price they are taken from.
    FeesExceedPrice {
        price: Amount,
        total_fee: Amount,
        shortfall: Amount,
    },
    /// Listing price is above the organizer's resale ceiling.
    MarkupExceedsCap { listing: Amount, max_allowed: Amount },
    /// Withdrawal smaller than the configured minimum.
    BelowMinimum { amount: Amount, minimum: Amount },
    /// Withdrawal larger than the available balance.
    InsufficientBalance { amount: Amount, available: Amount },
    /// Arithmetic left the representable range.
    Overflow(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::FeesExceedPrice {
                price,
                total_fee,
                shortfall,
            } => write!(
                f,
                "Fees exceed price: fees {} on price {} leave the seller {} short",
                total_fee.to_idrx_string(),
                price.to_idrx_string(),
                shortfall.to_idrx_string()
            ),
            Self::MarkupExceedsCap {
                listing,
                max_allowed,
            } => write!(
                f,
                "Markup exceeds cap: listing {} is above the maximum {}",
                listing.to_idrx_string(),
                max_allowed.to_idrx_string()
            ),
            Self::BelowMinimum { amount, minimum } => write!(
                f,
                "Below minimum: {} is less than the minimum {}",
                amount.to_idrx_string(),
                minimum.to_idrx_string()
            ),
            Self::InsufficientBalance { amount, available } => write!(
                f,
                "Insufficient balance: requested {} but only {} is available",
                amount.to_idrx_string(),
                available.to_idrx_string()
            ),
            Self::Overflow(msg) => write!(f, "Overflow: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

// ── Factory helpers for common errors ────────────────────────────────────────

impl PricingError {
    pub fn overflow(context: &str) -> Self {
        Self::Overflow(format!("{} is out of range", context))
    }
    pub fn zero_original_price() -> Self {
        Self::InvalidInput("Original price must be greater than zero".into())
    }
    pub fn invalid_amount(raw: &str, reason: &str) -> Self {
        Self::InvalidInput(format!("Invalid amount '{}': {}", raw, reason))
    }
    pub fn invalid_rate(reason: impl std::fmt::Display) -> Self {
        Self::InvalidInput(format!("Invalid fee rate: {}", reason))
    }
}
