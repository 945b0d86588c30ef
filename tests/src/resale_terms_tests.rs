//! Organizer resale rules: markup ceiling and fee caps.

use anyhow::Result;
use ticketing_pricing::{PricingError, ResaleTerms};

use crate::utils::{idrx, pct};

#[test]
fn test_default_ceiling_is_twenty_percent() -> Result<()> {
    let terms = ResaleTerms::default();
    assert_eq!(terms.max_listing_price(idrx("500")?)?, idrx("600")?);
    assert!(terms.quote(idrx("600")?, idrx("500")?).is_ok());
    Ok(())
}

#[test]
fn test_listing_above_ceiling_refused() -> Result<()> {
    let terms = ResaleTerms::default();
    let err = terms.quote(idrx("600.000001")?, idrx("500")?).unwrap_err();
    assert!(matches!(err, PricingError::MarkupExceedsCap { .. }));
    Ok(())
}

#[test]
fn test_event_configured_ceiling() -> Result<()> {
    // Create-event form default: 15% max markup.
    let terms = ResaleTerms {
        max_markup: pct(15.0)?,
        ..ResaleTerms::default()
    };
    assert_eq!(terms.max_listing_price(idrx("100")?)?, idrx("115")?);
    assert!(terms.check_listing(idrx("100")?, idrx("116")?).is_err());
    Ok(())
}

#[test]
fn test_zero_markup_allows_only_original_or_less() -> Result<()> {
    let terms = ResaleTerms {
        max_markup: pct(0.0)?,
        ..ResaleTerms::default()
    };
    assert!(terms.check_listing(idrx("80")?, idrx("80")?).is_ok());
    assert!(terms.check_listing(idrx("80")?, idrx("80.01")?).is_err());
    Ok(())
}

#[test]
fn test_organizer_fee_cap() -> Result<()> {
    let at_cap = ResaleTerms {
        organizer_fee: pct(10.0)?,
        ..ResaleTerms::default()
    };
    assert!(at_cap.validate().is_ok());

    let over_cap = ResaleTerms {
        organizer_fee: pct(10.5)?,
        ..ResaleTerms::default()
    };
    assert!(over_cap.validate().is_err());
    Ok(())
}

#[test]
fn test_zero_original_price_refused() -> Result<()> {
    let err = ResaleTerms::default()
        .quote(idrx("0")?, idrx("0")?)
        .unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput(_)));
    Ok(())
}
