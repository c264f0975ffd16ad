//! Property-based tests for forecast module.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::adjustment::ForecastAdjuster;
use super::aggregation::aggregate_by_month;
use super::engine::ForecastEngine;
use super::types::YearMonth;
use crate::transaction::Transaction;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Amounts in cents over two years of dates.
fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (-500_000i64..500_000, 0i64..730).prop_map(|(cents, offset)| {
        Transaction::new(Decimal::new(cents, 2), base_date() + Duration::days(offset))
    })
}

fn history_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 1..80)
}

proptest! {
    /// Forecast shape: exactly `horizon` consecutive months, each with net = income - expenses.
    #[test]
    fn test_projection_count_and_net_identity(
        txs in history_strategy(),
        horizon in 0u32..=24,
    ) {
        let forecast = ForecastEngine::generate_as_of(&txs, horizon, as_of()).unwrap();

        prop_assert_eq!(forecast.projections.len(), horizon as usize);
        let mut expected_month = YearMonth::from_date(as_of());
        for projection in &forecast.projections {
            expected_month = expected_month.following();
            prop_assert_eq!(projection.month, expected_month);
            prop_assert_eq!(
                projection.projected_net_cash_flow,
                projection.projected_income - projection.projected_expenses
            );
            prop_assert!(projection.projected_income >= Decimal::ZERO);
            prop_assert!(projection.projected_expenses >= Decimal::ZERO);
        }
    }

    /// Seasonal factors exist exactly for the calendar months seen in history.
    #[test]
    fn test_factors_only_for_observed_months(txs in history_strategy()) {
        let forecast = ForecastEngine::generate_as_of(&txs, 1, as_of()).unwrap();

        let observed: BTreeSet<u32> = aggregate_by_month(&txs).iter().map(|m| m.month_index).collect();
        let with_factor: BTreeSet<u32> = forecast.seasonal_factors.iter().map(|f| f.month_index).collect();

        prop_assert_eq!(observed, with_factor);
    }

    /// Confidence always comes from the policy table.
    #[test]
    fn test_confidence_in_policy_table(txs in history_strategy()) {
        let forecast = ForecastEngine::generate_as_of(&txs, 1, as_of()).unwrap();
        let allowed = [dec!(0.5), dec!(0.6), dec!(0.7), dec!(0.8), dec!(0.9)];

        prop_assert!(allowed.contains(&forecast.confidence));
    }

    /// Adjustment never touches the elapsed month or earlier, and keeps the net identity.
    #[test]
    fn test_adjustment_preserves_history_and_identity(
        txs in history_strategy(),
        horizon in 1u32..=12,
        elapsed in 0usize..12,
        actual_income in 0i64..1_000_000,
        actual_expenses in 0i64..1_000_000,
    ) {
        let forecast = ForecastEngine::generate_as_of(&txs, horizon, as_of()).unwrap();
        let adjusted = ForecastAdjuster::adjust(
            &forecast,
            Decimal::new(actual_income, 2),
            Decimal::new(actual_expenses, 2),
            elapsed,
        );

        prop_assert_eq!(adjusted.projections.len(), forecast.projections.len());
        let untouched = (elapsed + 1).min(forecast.projections.len());
        prop_assert_eq!(&adjusted.projections[..untouched], &forecast.projections[..untouched]);
        for projection in &adjusted.projections {
            prop_assert_eq!(
                projection.projected_net_cash_flow,
                projection.projected_income - projection.projected_expenses
            );
        }
        prop_assert_eq!(adjusted.confidence, forecast.confidence);
        prop_assert_eq!(&adjusted.seasonal_factors, &forecast.seasonal_factors);
    }

    /// Actuals matching the projection exactly leave the forecast as it was.
    #[test]
    fn test_on_target_actuals_are_a_no_op(
        txs in history_strategy(),
        horizon in 1u32..=12,
    ) {
        let forecast = ForecastEngine::generate_as_of(&txs, horizon, as_of()).unwrap();
        let first = &forecast.projections[0];

        let adjusted = ForecastAdjuster::adjust(
            &forecast,
            first.projected_income,
            first.projected_expenses,
            0,
        );

        prop_assert_eq!(adjusted, forecast);
    }
}
