//! Revenue totals over a set of completed sales.

use serde::{Deserialize, Serialize};

use crate::constants::BASIS_POINTS;
use crate::math::mul_div;
use crate::split::FeeSplit;
use crate::{Amount, PricingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleKind {
    Primary,
    Resale,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub kind: SaleKind,
    pub split: FeeSplit,
}

impl SaleRecord {
    pub fn new(kind: SaleKind, split: FeeSplit) -> Self {
        Self { kind, split }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub gross: Amount,
    pub organizer_fees: Amount,
    pub platform_fees: Amount,
    pub net: Amount,
    pub primary_count: u64,
    pub resale_count: u64,
    pub withdrawal_count: u64,
}

impl RevenueSummary {
    pub fn from_records<'a, I>(records: I) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = &'a SaleRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            summary.record(record)?;
        }
        Ok(summary)
    }

    /// Adds one sale. On error the summary is left untouched.
    pub fn record(&mut self, record: &SaleRecord) -> Result<(), PricingError> {
        let split = &record.split;
        let gross = add(self.gross, split.price, "gross revenue")?;
        let organizer_fees = add(self.organizer_fees, split.organizer_fee, "organizer fees")?;
        let platform_fees = add(self.platform_fees, split.platform_fee, "platform fees")?;
        let net = add(self.net, split.net, "net revenue")?;

        self.gross = gross;
        self.organizer_fees = organizer_fees;
        self.platform_fees = platform_fees;
        self.net = net;
        match record.kind {
            SaleKind::Primary => self.primary_count += 1,
            SaleKind::Resale => self.resale_count += 1,
            SaleKind::Withdrawal => self.withdrawal_count += 1,
        }
        Ok(())
    }

    pub fn transaction_count(&self) -> u64 {
        self.primary_count + self.resale_count + self.withdrawal_count
    }

    /// Platform fees as a share of gross, in basis points. Zero when nothing was sold.
    pub fn effective_platform_fee_bps(&self) -> u32 {
        mul_div(
            self.platform_fees.as_micros(),
            BASIS_POINTS as u128,
            self.gross.as_micros(),
        )
        .and_then(|bps| u32::try_from(bps).ok())
        .unwrap_or(0)
    }
}

fn add(total: Amount, value: Amount, what: &str) -> Result<Amount, PricingError> {
    total
        .checked_add(value)
        .ok_or_else(|| PricingError::overflow(what))
}
