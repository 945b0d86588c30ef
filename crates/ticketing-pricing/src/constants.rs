//! Pricing-wide constants.

/// Basis points denominator (10,000 = 100%)
pub const BASIS_POINTS: u32 = 10_000;

/// Micro-units per whole IDRX. Six decimals keep every fee of a
/// whole-unit price at basis-point resolution exact.
pub const AMOUNT_SCALE: u128 = 1_000_000;

/// Number of fractional digits `AMOUNT_SCALE` represents.
pub const AMOUNT_DECIMALS: usize = 6;

/// Fractional digits shown in fee breakdowns.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Currency label used in rendered amounts.
pub const CURRENCY_SYMBOL: &str = "IDRX";

/// Default organizer cut on resale (250 = 2.5%).
pub const DEFAULT_ORGANIZER_FEE_BPS: u32 = 250;

/// Default platform cut on resale (300 = 3%).
pub const DEFAULT_RESALE_PLATFORM_FEE_BPS: u32 = 300;

/// Default platform cut on primary ticket sales (700 = 7%).
pub const DEFAULT_PRIMARY_PLATFORM_FEE_BPS: u32 = 700;

/// Default fee on organizer withdrawals (100 = 1%).
pub const DEFAULT_WITHDRAWAL_FEE_BPS: u32 = 100;

/// Default resale ceiling above the original price (2000 = 20%).
pub const DEFAULT_MAX_MARKUP_BPS: u32 = 2_000;

/// Highest organizer cut an event may configure (1000 = 10%).
pub const MAX_ORGANIZER_FEE_BPS: u32 = 1_000;

/// Smallest withdrawal, in whole IDRX.
pub const DEFAULT_MIN_WITHDRAWAL_IDRX: u64 = 1;
