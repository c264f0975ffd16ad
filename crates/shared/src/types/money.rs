//! Money formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end; this module only fixes how
//! they are rounded for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for monetary amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Rounds an amount to display precision (midpoint away from zero).
#[must_use]
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places, e.g. `1234.50`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_for_display(amount);
    // -0.00 reads badly in reports
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}
