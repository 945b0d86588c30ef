//! Fee split scenarios and properties across call sites.

use anyhow::Result;
use ticketing_pricing::{
    compute_fee_split, markup_percentage, tier_proceeds, Amount, FeeSchedule, PriceBand,
    PricingError,
};

use crate::utils::{idrx, parts_total, pct};

// ── Seed scenarios ──────────────────────────────────────────────────

#[test]
fn test_resale_modal_defaults() -> Result<()> {
    let quote = compute_fee_split(idrx("495")?, pct(2.5)?, pct(3.0)?, idrx("500")?)?;
    assert_eq!(quote.organizer_fee_amount, idrx("12.375")?);
    assert_eq!(quote.platform_fee_amount, idrx("14.85")?);
    assert_eq!(quote.net_seller_amount, idrx("467.775")?);
    assert_eq!(quote.markup_percentage, 99);
    Ok(())
}

#[test]
fn test_ticket_tier_form() -> Result<()> {
    let proceeds = tier_proceeds(idrx("50")?, pct(7.0)?)?;
    assert_eq!(proceeds.fee_deducted, idrx("3.5")?);
    assert_eq!(proceeds.received, idrx("46.5")?);
    Ok(())
}

#[test]
fn test_zero_listing_price() -> Result<()> {
    let split = FeeSchedule::new(pct(2.5)?, pct(3.0)?).split(Amount::ZERO)?;
    assert_eq!(split.net, Amount::ZERO);
    Ok(())
}

#[test]
fn test_fees_above_price_flagged_not_accepted() -> Result<()> {
    let result = compute_fee_split(idrx("100")?, pct(60.0)?, pct(50.0)?, idrx("100")?);
    match result {
        Err(err @ PricingError::FeesExceedPrice { shortfall, .. }) => {
            assert_eq!(shortfall, idrx("10")?);
            assert!(err.to_string().contains("10.00 IDRX short"));
        }
        other => panic!("expected FeesExceedPrice, got {other:?}"),
    }
    Ok(())
}

// ── Properties ──────────────────────────────────────────────────────

#[test]
fn test_parts_add_up_to_price() -> Result<()> {
    let prices = ["0", "0.000001", "1", "49.99", "495", "1234567.891011"];
    let rates = [(0.0, 0.0), (2.5, 3.0), (2.5, 7.0), (10.0, 1.0), (50.0, 50.0)];
    for price in prices {
        for (organizer, platform) in rates {
            let price = idrx(price)?;
            let split = FeeSchedule::new(pct(organizer)?, pct(platform)?).split(price)?;
            assert_eq!(parts_total(&split), price.as_micros());
        }
    }
    Ok(())
}

#[test]
fn test_raising_organizer_rate_lowers_net() -> Result<()> {
    let price = idrx("495")?;
    let mut previous = None;
    for organizer in [0.0, 0.01, 1.0, 2.5, 5.0, 10.0] {
        let net = FeeSchedule::new(pct(organizer)?, pct(3.0)?).split(price)?.net;
        if let Some(prev) = previous {
            assert!(net < prev, "net did not drop at {organizer}%");
        }
        previous = Some(net);
    }
    Ok(())
}

#[test]
fn test_zero_rates_keep_price() -> Result<()> {
    let price = idrx("777.7")?;
    let split = FeeSchedule::new(pct(0.0)?, pct(0.0)?).split(price)?;
    assert_eq!(split.net, price);
    Ok(())
}

#[test]
fn test_markup_matches_rounded_ratio() -> Result<()> {
    let cases = [("495", "500", 99), ("600", "500", 120), ("1", "3", 33), ("2", "3", 67)];
    for (listing, original, expected) in cases {
        assert_eq!(markup_percentage(idrx(listing)?, idrx(original)?)?, expected);
    }
    Ok(())
}

#[test]
fn test_same_inputs_same_outputs() -> Result<()> {
    let first = compute_fee_split(idrx("550")?, pct(2.5)?, pct(3.0)?, idrx("500")?)?;
    let second = compute_fee_split(idrx("550")?, pct(2.5)?, pct(3.0)?, idrx("500")?)?;
    assert_eq!(first, second);
    assert_eq!(first.price_band(), PriceBand::Markup);
    Ok(())
}

/// Fixed-point results agree with the float formulas to well under a
/// display cent; only the final display rounding can differ.
#[test]
fn test_agrees_with_float_formulas() -> Result<()> {
    let (listing, organizer, platform) = (495.0_f64, 2.5_f64, 3.0_f64);
    let quote = compute_fee_split(idrx("495")?, pct(organizer)?, pct(platform)?, idrx("500")?)?;
    let float_net = listing - listing * organizer / 100.0 - listing * platform / 100.0;
    let fixed_net = quote.net_seller_amount.as_micros() as f64 / 1_000_000.0;
    assert!((float_net - fixed_net).abs() < 1e-9);
    Ok(())
}
