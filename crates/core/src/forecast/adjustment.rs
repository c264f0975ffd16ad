//! Revising forecasts once a projected month has actually elapsed.

use rust_decimal::Decimal;
use tracing::debug;

use super::engine::PROJECTION_SCALE;
use super::types::{CashFlowForecast, MonthlyProjection};

/// Amounts below this are treated as nothing at all.
pub const MATERIALITY_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Relative miss above which the remaining projections are rescaled.
pub const DEVIATION_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// How one side (income or expenses) of future projections is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionScale {
    /// Multiply by `actual / projected`.
    Ratio(Decimal),
    /// The projection was negligible: replace it with the realized amount.
    Rebaseline(Decimal),
    /// Leave as is.
    Keep,
}

impl ProjectionScale {
    /// Chooses the scale for one side from its projected and actual amounts.
    #[must_use]
    pub fn between(projected: Decimal, actual: Decimal) -> Self {
        if projected > MATERIALITY_THRESHOLD {
            Self::Ratio(actual / projected)
        } else if actual > MATERIALITY_THRESHOLD {
            Self::Rebaseline(actual)
        } else {
            Self::Keep
        }
    }

    /// Applies the scale to a projected amount.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            Self::Ratio(ratio) => (value * ratio).round_dp(PROJECTION_SCALE),
            Self::Rebaseline(actual) => actual,
            Self::Keep => value,
        }
    }
}

/// Relative miss of `actual` against `projected`.
///
/// A negligible projection met by a material actual counts as a full (1.0)
/// miss; two negligible amounts count as none.
#[must_use]
pub fn deviation(projected: Decimal, actual: Decimal) -> Decimal {
    if projected > MATERIALITY_THRESHOLD {
        (actual - projected).abs() / projected
    } else if actual.abs() > MATERIALITY_THRESHOLD {
        Decimal::ONE
    } else {
        Decimal::ZERO
    }
}

/// Rescales forecasts against realized results.
pub struct ForecastAdjuster;

impl ForecastAdjuster {
    /// Returns `forecast` revised with the actual totals of the projection at
    /// `elapsed_period_index`.
    ///
    /// Projections after the elapsed one are rescaled when either side missed
    /// by more than 20%; the elapsed projection and everything before it are
    /// left alone. Otherwise (small miss, negligible amounts, index out of
    /// range) the forecast comes back unchanged. Each call builds on the
    /// forecast it is given, so successive calls with different actuals
    /// compound.
    #[must_use]
    pub fn adjust(
        forecast: &CashFlowForecast,
        actual_income: Decimal,
        actual_expenses: Decimal,
        elapsed_period_index: usize,
    ) -> CashFlowForecast {
        let Some(elapsed) = forecast.projections.get(elapsed_period_index) else {
            debug!(
                elapsed_period_index,
                horizon = forecast.projections.len(),
                "Elapsed period outside forecast, nothing to adjust"
            );
            return forecast.clone();
        };

        let projected_total = elapsed.projected_income.abs() + elapsed.projected_expenses.abs();
        let actual_total = actual_income.abs() + actual_expenses.abs();
        if projected_total < MATERIALITY_THRESHOLD && actual_total < MATERIALITY_THRESHOLD {
            return forecast.clone();
        }

        let income_deviation = deviation(elapsed.projected_income, actual_income);
        let expense_deviation = deviation(elapsed.projected_expenses, actual_expenses);
        if income_deviation <= DEVIATION_THRESHOLD && expense_deviation <= DEVIATION_THRESHOLD {
            debug!(
                month = %elapsed.month,
                %income_deviation,
                %expense_deviation,
                "Forecast within tolerance"
            );
            return forecast.clone();
        }

        let income_scale = ProjectionScale::between(elapsed.projected_income, actual_income);
        let expense_scale = ProjectionScale::between(elapsed.projected_expenses, actual_expenses);

        let mut adjusted = forecast.clone();
        for projection in adjusted.projections.iter_mut().skip(elapsed_period_index + 1) {
            *projection = MonthlyProjection::new(
                projection.month,
                income_scale.apply(projection.projected_income),
                expense_scale.apply(projection.projected_expenses),
            );
        }
        adjusted.assumptions.push(format!(
            "Projections after {} adjusted due to >20% deviation between projected and actual results",
            elapsed.month
        ));

        debug!(
            month = %elapsed.month,
            %income_deviation,
            %expense_deviation,
            ?income_scale,
            ?expense_scale,
            "Adjusted forecast"
        );

        adjusted
    }
}
