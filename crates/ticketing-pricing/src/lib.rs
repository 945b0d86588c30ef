//! Fee splits and payout math for the ticketing marketplace.
//! Pure computation, no I/O. Amounts are fixed-point IDRX and every
//! calculator reports degenerate input as a `PricingError`.

mod amount;
mod config;
pub mod constants;
mod error;
mod ledger;
mod markup;
mod math;
mod rate;
mod resale;
mod split;
mod tier;
mod withdrawal;

pub use amount::Amount;
pub use config::PricingConfig;
pub use error::PricingError;
pub use ledger::{RevenueSummary, SaleKind, SaleRecord};
pub use markup::{PriceBand, bar_fill_percentage, markup_percentage};
pub use rate::FeeRate;
pub use resale::ResaleTerms;
pub use split::{FeeSchedule, FeeSplit, ResaleQuote, compute_fee_split};
pub use tier::{PrimaryTerms, TierProceeds, tier_proceeds};
pub use withdrawal::{WithdrawalPolicy, WithdrawalQuote};
