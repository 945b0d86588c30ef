//! Quote tool: configuration per call site and rendered output.

use anyhow::Result;
use fee_quote::{settings, Error, Quote, ResaleOverrides};
use ticketing_pricing::PricingError;

use crate::utils::idrx;

const MIXED_RATES: &str = r#"
[resale]
organizer_fee = 2.5
platform_fee = 3

[primary]
platform_fee = 7

[withdrawal]
fee = 1
minimum = 1
"#;

#[test]
fn test_each_call_site_uses_its_own_rate() -> Result<()> {
    let pricing = settings::from_toml_str(MIXED_RATES)?;

    let resale = Quote::resale(&pricing, idrx("495")?, idrx("500")?, ResaleOverrides::default())?;
    let tier = Quote::tier(&pricing, idrx("50")?, None)?;
    let withdrawal = Quote::withdrawal(&pricing, idrx("100")?, idrx("100")?)?;

    assert!(resale.render().contains("Platform Fee (3%):"));
    assert!(tier.render().contains("Platform Fee (7%):"));
    assert!(withdrawal.render().contains("Platform Fee (1%):"));
    Ok(())
}

#[test]
fn test_overfull_override_is_refused() -> Result<()> {
    let pricing = settings::from_toml_str("")?;
    let err = Quote::resale(
        &pricing,
        idrx("100")?,
        idrx("100")?,
        ResaleOverrides {
            organizer_fee: Some("10".parse()?),
            platform_fee: Some("95".parse()?),
            skip_cap: true,
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::Pricing(PricingError::InvalidInput(_))));
    assert!(err.to_string().contains("exceeds 100%"));
    Ok(())
}

#[test]
fn test_organizer_override_respects_cap() -> Result<()> {
    let pricing = settings::from_toml_str(MIXED_RATES)?;
    let over = ResaleOverrides {
        organizer_fee: Some("12%".parse()?),
        ..ResaleOverrides::default()
    };
    assert!(Quote::resale(&pricing, idrx("495")?, idrx("500")?, over).is_err());

    let at_cap = ResaleOverrides {
        organizer_fee: Some("10%".parse()?),
        ..ResaleOverrides::default()
    };
    let quote = Quote::resale(&pricing, idrx("495")?, idrx("500")?, at_cap)?;
    assert!(quote.render().contains("Organizer Fee (10%):"));
    Ok(())
}

#[test]
fn test_withdrawal_limits_reported() -> Result<()> {
    let pricing = settings::from_toml_str(MIXED_RATES)?;
    let too_small = Quote::withdrawal(&pricing, idrx("0.5")?, idrx("100")?).unwrap_err();
    assert!(too_small.to_string().contains("Below minimum"));
    let too_large = Quote::withdrawal(&pricing, idrx("101")?, idrx("100")?).unwrap_err();
    assert!(too_large.to_string().contains("Insufficient balance"));
    Ok(())
}

#[test]
fn test_json_output_round_trips_through_serde_json() -> Result<()> {
    let pricing = settings::from_toml_str(MIXED_RATES)?;
    let tier = Quote::tier(&pricing, idrx("50")?, None)?;
    let json: serde_json::Value = serde_json::from_str(&tier.to_json()?)?;
    assert_eq!(json["kind"], "tier");
    assert_eq!(json["fee_deducted"], "3.5");
    assert_eq!(json["received"], "46.5");
    Ok(())
}
