use anyhow::Result;
use ticketing_pricing::{Amount, FeeRate};

/// Parse a decimal IDRX amount.
pub fn idrx(raw: &str) -> Result<Amount> {
    Ok(raw.parse::<Amount>()?)
}

/// Build a rate from a percent number.
pub fn pct(percent: f64) -> Result<FeeRate> {
    Ok(FeeRate::from_percent(percent)?)
}

/// Sum of the three parts of a split, in micro-units.
pub fn parts_total(split: &ticketing_pricing::FeeSplit) -> u128 {
    split.organizer_fee.as_micros() + split.platform_fee.as_micros() + split.net.as_micros()
}
