//! Seasonal pattern detection.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::stats::mean;
use super::types::{MonthlyAggregate, SeasonalFactor};

/// Derives a factor per calendar month observed in `aggregates`.
///
/// Occurrences of the same calendar month across years are pooled. Each
/// factor is the pooled mean divided by the mean over every aggregate, or 1
/// when that overall mean is zero. Months never observed get no entry.
/// Output is ordered by month index.
#[must_use]
pub fn detect_seasonal_patterns(aggregates: &[MonthlyAggregate]) -> Vec<SeasonalFactor> {
    let incomes: Vec<Decimal> = aggregates.iter().map(|a| a.income).collect();
    let expenses: Vec<Decimal> = aggregates.iter().map(|a| a.expenses).collect();
    let overall_income = mean(&incomes);
    let overall_expenses = mean(&expenses);

    let mut by_month: BTreeMap<u32, (Vec<Decimal>, Vec<Decimal>)> = BTreeMap::new();
    for aggregate in aggregates {
        let (income, expense) = by_month.entry(aggregate.month_index).or_default();
        income.push(aggregate.income);
        expense.push(aggregate.expenses);
    }

    by_month
        .into_iter()
        .map(|(month_index, (income, expense))| SeasonalFactor {
            month_index,
            income_factor: ratio(mean(&income), overall_income),
            expense_factor: ratio(mean(&expense), overall_expenses),
        })
        .collect()
}

fn ratio(group_mean: Decimal, overall_mean: Decimal) -> Decimal {
    if overall_mean.is_zero() {
        Decimal::ONE
    } else {
        group_mean / overall_mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::YearMonth;
    use rust_decimal_macros::dec;

    fn aggregate(year: i32, month: u32, income: Decimal, expenses: Decimal) -> MonthlyAggregate {
        let month = YearMonth::new(year, month).unwrap();
        MonthlyAggregate {
            month,
            month_index: month.month_index(),
            income,
            expenses,
        }
    }

    #[test]
    fn test_no_history_no_factors() {
        assert!(detect_seasonal_patterns(&[]).is_empty());
    }

    #[test]
    fn test_pools_years_and_skips_unobserved_months() {
        let aggregates = vec![
            aggregate(2024, 1, dec!(1000), dec!(400)),
            aggregate(2024, 7, dec!(3000), dec!(400)),
            aggregate(2025, 1, dec!(2000), dec!(400)),
        ];

        let factors = detect_seasonal_patterns(&aggregates);

        // overall income mean 2000; January pooled mean 1500, July 3000
        assert_eq!(
            factors,
            vec![
                SeasonalFactor {
                    month_index: 0,
                    income_factor: dec!(0.75),
                    expense_factor: dec!(1),
                },
                SeasonalFactor {
                    month_index: 6,
                    income_factor: dec!(1.5),
                    expense_factor: dec!(1),
                },
            ]
        );
        assert!(SeasonalFactor::lookup(&factors, 3).is_none());
    }

    #[test]
    fn test_zero_overall_mean_defaults_to_one() {
        let aggregates = vec![
            aggregate(2025, 1, dec!(0), dec!(100)),
            aggregate(2025, 2, dec!(0), dec!(300)),
        ];

        let factors = detect_seasonal_patterns(&aggregates);

        assert!(factors.iter().all(|f| f.income_factor == Decimal::ONE));
        assert_eq!(factors[0].expense_factor, dec!(0.5));
        assert_eq!(factors[1].expense_factor, dec!(1.5));
    }
}
