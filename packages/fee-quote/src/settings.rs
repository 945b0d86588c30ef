//! Loads `PricingConfig` from `pricing.toml` and `PRICING__*` environment variables.
//!
//! Example: `PRICING__RESALE__PLATFORM_FEE=1` overrides the resale platform rate.

use config::{Config, Environment, File, FileFormat};
use ticketing_pricing::PricingConfig;
use tracing::info;

use crate::Error;

/// Base name of the optional config file (any format `config` understands).
pub const CONFIG_FILE: &str = "pricing";

pub const ENV_PREFIX: &str = "PRICING";

const ENV_SEPARATOR: &str = "__";

pub fn load() -> Result<PricingConfig, Error> {
    load_from(CONFIG_FILE)
}

/// A missing file is not an error; every field has a default.
pub fn load_from(file: &str) -> Result<PricingConfig, Error> {
    let pricing: PricingConfig = Config::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()?
        .try_deserialize()?;
    finish(pricing)
}

/// Parses an inline TOML document, ignoring the environment.
pub fn from_toml_str(contents: &str) -> Result<PricingConfig, Error> {
    let pricing: PricingConfig = Config::builder()
        .add_source(File::from_str(contents, FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    finish(pricing)
}

fn finish(pricing: PricingConfig) -> Result<PricingConfig, Error> {
    pricing
        .validate()
        .map_err(|e| Error::Config(e.to_string()))?;
    info!(
        resale_organizer_fee = %pricing.resale.organizer_fee,
        resale_platform_fee = %pricing.resale.platform_fee,
        max_markup = %pricing.resale.max_markup,
        primary_platform_fee = %pricing.primary.platform_fee,
        withdrawal_fee = %pricing.withdrawal.fee,
        "Pricing configuration loaded"
    );
    Ok(pricing)
}
