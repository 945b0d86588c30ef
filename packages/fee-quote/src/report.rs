//! Quote construction and rendering.

use serde::Serialize;
use ticketing_pricing::{
    bar_fill_percentage, compute_fee_split, Amount, FeeRate, PricingConfig, ResaleQuote,
    TierProceeds, WithdrawalQuote,
};

use crate::Error;

const LABEL_WIDTH: usize = 28;
const VALUE_WIDTH: usize = 20;

/// Per-invocation rate overrides for a resale quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResaleOverrides {
    pub organizer_fee: Option<FeeRate>,
    pub platform_fee: Option<FeeRate>,
    /// Skip the organizer's markup ceiling.
    pub skip_cap: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quote {
    Resale {
        #[serde(flatten)]
        quote: ResaleQuote,
        max_listing_price: Amount,
    },
    Tier {
        #[serde(flatten)]
        proceeds: TierProceeds,
    },
    Withdrawal {
        #[serde(flatten)]
        quote: WithdrawalQuote,
        fee_rate: FeeRate,
    },
}

impl Quote {
    pub fn resale(
        pricing: &PricingConfig,
        listing: Amount,
        original: Amount,
        overrides: ResaleOverrides,
    ) -> Result<Self, Error> {
        let mut terms = pricing.resale;
        if let Some(rate) = overrides.organizer_fee {
            terms.organizer_fee = rate;
        }
        if let Some(rate) = overrides.platform_fee {
            terms.platform_fee = rate;
        }
        terms.validate()?;

        let quote = if overrides.skip_cap {
            compute_fee_split(listing, terms.organizer_fee, terms.platform_fee, original)?
        } else {
            terms.quote(listing, original)?
        };
        Ok(Quote::Resale {
            quote,
            max_listing_price: terms.max_listing_price(original)?,
        })
    }

    pub fn tier(
        pricing: &PricingConfig,
        price: Amount,
        platform_fee: Option<FeeRate>,
    ) -> Result<Self, Error> {
        let mut terms = pricing.primary;
        if let Some(rate) = platform_fee {
            terms.platform_fee = rate;
        }
        Ok(Quote::Tier {
            proceeds: terms.proceeds(price)?,
        })
    }

    pub fn withdrawal(
        pricing: &PricingConfig,
        amount: Amount,
        available: Amount,
    ) -> Result<Self, Error> {
        Ok(Quote::Withdrawal {
            quote: pricing.withdrawal.quote(amount, available)?,
            fee_rate: pricing.withdrawal.fee,
        })
    }

    /// Human-readable breakdown, one line per figure.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        match self {
            Quote::Resale {
                quote,
                max_listing_price,
            } => {
                lines.push(row("Listing Price:", quote.listing_price.to_idrx_string()));
                lines.push(row(
                    &format!("Organizer Fee ({}):", quote.organizer_fee_rate),
                    format!("-{}", quote.organizer_fee_amount.to_idrx_string()),
                ));
                lines.push(row(
                    &format!("Platform Fee ({}):", quote.platform_fee_rate),
                    format!("-{}", quote.platform_fee_amount.to_idrx_string()),
                ));
                lines.push(row("You'll Receive:", quote.net_seller_amount.to_idrx_string()));
                lines.push(String::new());
                lines.push(format!(
                    "Percentage of original price: {}% ({}) [{}]",
                    quote.markup_percentage,
                    quote.price_band().label(),
                    bar(bar_fill_percentage(quote.markup_percentage)),
                ));
                lines.push(format!(
                    "Original price: {}, maximum listing: {}",
                    quote.original_price.to_idrx_string(),
                    max_listing_price.to_idrx_string()
                ));
            }
            Quote::Tier { proceeds } => {
                lines.push(row("Ticket Price:", proceeds.price.to_idrx_string()));
                lines.push(row(
                    &format!("Platform Fee ({}):", proceeds.platform_fee_rate),
                    format!("-{}", proceeds.fee_deducted.to_idrx_string()),
                ));
                lines.push(row("You'll Receive:", proceeds.received.to_idrx_string()));
            }
            Quote::Withdrawal { quote, fee_rate } => {
                lines.push(row("Withdrawal Amount:", quote.amount.to_idrx_string()));
                lines.push(row(
                    &format!("Platform Fee ({}):", fee_rate),
                    format!("-{}", quote.fee.to_idrx_string()),
                ));
                lines.push(row("You'll Receive:", quote.net.to_idrx_string()));
                lines.push(row("Remaining Balance:", quote.remaining_balance.to_idrx_string()));
            }
        }
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn row(label: &str, value: String) -> String {
    format!("{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}")
}

/// Ten-cell bar for a 0..=100 fill.
fn bar(fill: u64) -> String {
    let cells = (fill / 10) as usize;
    format!("{}{}", "#".repeat(cells), ".".repeat(10 - cells))
}
