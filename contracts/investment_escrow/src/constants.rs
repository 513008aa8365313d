//! Protocol constants.
//!
//! Amounts are expressed in token base units. `UNIT` is one whole token
//! (7 decimals, as for Stellar asset contracts).

// ── Units ────────────────────────────────────────────────────────────

pub const UNIT: i128 = 10_000_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

// ── Offer bounds ─────────────────────────────────────────────────────

/// 0.01 tokens.
pub const MIN_INVESTMENT_AMOUNT: i128 = UNIT / 100;

/// 1,000 tokens.
pub const MAX_INVESTMENT_AMOUNT: i128 = 1_000 * UNIT;

pub const MIN_EQUITY_PERCENTAGE: u32 = 1;
pub const MAX_EQUITY_PERCENTAGE: u32 = 100;

/// Startup name length in bytes. Names must also be non-empty.
pub const MAX_NAME_LENGTH: u32 = 32;

/// Description length in bytes.
pub const MAX_DESCRIPTION_LENGTH: u32 = 1_000;

/// Upper bound on identifiers ever issued.
pub const MAX_INVESTMENTS: u64 = 10_000;

// ── Fees ─────────────────────────────────────────────────────────────

/// Floor applied to every platform fee: 0.001 tokens.
pub const MIN_PLATFORM_FEE: i128 = UNIT / 1_000;

pub const MAX_PLATFORM_FEE_PERCENTAGE: u32 = 5;
pub const DEFAULT_PLATFORM_FEE_PERCENTAGE: u32 = 1;

/// Minimum time between two platform fee changes.
pub const FEE_UPDATE_INTERVAL: u64 = SECONDS_PER_DAY;

// ── Timing ───────────────────────────────────────────────────────────

pub const DEFAULT_FUNDING_DURATION_DAYS: u64 = 1;

/// Window after the funding deadline reserved for repayment.
pub const MIN_LOCK_PERIOD: u64 = 7 * SECONDS_PER_DAY;
