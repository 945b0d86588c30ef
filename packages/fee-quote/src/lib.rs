//! # Fee Quote
//!
//! Renders the fee breakdowns shown in the ticketing marketplace from the
//! command line: resale listings, primary ticket tiers and organizer
//! withdrawals.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin fee-quote -- resale --price 495 --original 500
//! ```
//!
//! Rates come from `pricing.toml` and `PRICING__*` environment variables;
//! see [`settings`].

mod error;
pub mod report;
pub mod settings;

pub use error::Error;
pub use report::{Quote, ResaleOverrides};
