//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` values carrying 2 fractional
//! digits of currency precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to currency precision.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Formats an amount as a dollar string with 2 decimal places, e.g. `$100.00`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", round_currency(amount))
}
