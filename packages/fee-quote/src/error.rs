//! Error types for the quote tool.

use std::fmt;

use ticketing_pricing::PricingError;

#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded or failed validation.
    Config(String),
    /// A calculator refused its input.
    Pricing(PricingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Pricing(err) => write!(f, "pricing error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Pricing(err) => Some(err),
        }
    }
}

impl From<PricingError> for Error {
    fn from(err: PricingError) -> Self {
        Error::Pricing(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
