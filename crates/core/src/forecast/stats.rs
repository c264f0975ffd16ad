//! Small descriptive statistics over decimal series.

use rust_decimal::{Decimal, MathematicalOps};

/// Arithmetic mean; zero for an empty series.
#[must_use]
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().copied().sum::<Decimal>() / Decimal::from(values.len())
}

/// Population standard deviation divided by the mean.
///
/// Zero when the series is empty or its mean is zero. Deviations are taken
/// relative to the mean before squaring so large amounts cannot overflow.
#[must_use]
pub fn coefficient_of_variation(values: &[Decimal]) -> Decimal {
    let avg = mean(values);
    if avg.is_zero() {
        return Decimal::ZERO;
    }

    let squared: Vec<Decimal> = values
        .iter()
        .map(|v| {
            let relative = (*v - avg) / avg;
            relative * relative
        })
        .collect();

    mean(&squared).sqrt().unwrap_or(Decimal::ZERO).abs()
}
