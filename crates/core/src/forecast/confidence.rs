//! Forecast confidence scoring.

use rust_decimal::Decimal;

use super::stats::coefficient_of_variation;
use super::types::MonthlyAggregate;

const VERY_LOW: Decimal = Decimal::from_parts(6, 0, 0, false, 1);
const LOW: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const MODERATE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);
const GOOD: Decimal = Decimal::from_parts(8, 0, 0, false, 1);
const HIGH: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

const STABLE_CV: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
const MODERATE_CV: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Scores how much a forecast built from `aggregates` can be trusted.
///
/// | History | Average CV | Score |
/// |---------|------------|-------|
/// | < 3 months | - | 0.5 |
/// | < 6 months | - | 0.7 |
/// | 6+ months | < 0.3 | 0.9 |
/// | 6+ months | < 0.6 | 0.8 |
/// | 6+ months | < 1.0 | 0.7 |
/// | 6+ months | otherwise | 0.6 |
///
/// The average CV is the mean of the income and expense series' coefficients
/// of variation.
#[must_use]
pub fn confidence_score(aggregates: &[MonthlyAggregate]) -> Decimal {
    match aggregates.len() {
        0..3 => LOW,
        3..6 => MODERATE,
        _ => {
            let incomes: Vec<Decimal> = aggregates.iter().map(|a| a.income).collect();
            let expenses: Vec<Decimal> = aggregates.iter().map(|a| a.expenses).collect();
            let average_cv = (coefficient_of_variation(&incomes)
                + coefficient_of_variation(&expenses))
                / Decimal::TWO;

            if average_cv < STABLE_CV {
                HIGH
            } else if average_cv < MODERATE_CV {
                GOOD
            } else if average_cv < Decimal::ONE {
                MODERATE
            } else {
                VERY_LOW
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::YearMonth;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn history(values: &[(i64, i64)]) -> Vec<MonthlyAggregate> {
        let mut month = YearMonth::new(2024, 1).unwrap();
        values
            .iter()
            .map(|&(income, expenses)| {
                let aggregate = MonthlyAggregate {
                    month,
                    month_index: month.month_index(),
                    income: Decimal::from(income),
                    expenses: Decimal::from(expenses),
                };
                month = month.following();
                aggregate
            })
            .collect()
    }

    #[rstest]
    #[case(0, dec!(0.5))]
    #[case(1, dec!(0.5))]
    #[case(2, dec!(0.5))]
    #[case(3, dec!(0.7))]
    #[case(5, dec!(0.7))]
    fn test_short_history(#[case] months: usize, #[case] expected: Decimal) {
        let aggregates = history(&vec![(1000, 500); months]);
        assert_eq!(confidence_score(&aggregates), expected);
    }

    #[test]
    fn test_stable_history_scores_high() {
        let aggregates = history(&[(1000, 500); 12]);
        assert_eq!(confidence_score(&aggregates), dec!(0.9));
    }

    #[test]
    fn test_moderate_variation() {
        // income CV = 1/3, expense CV = 0.5 -> average ~0.417
        let aggregates = history(&[
            (1000, 250),
            (2000, 750),
            (1000, 250),
            (2000, 750),
            (1000, 250),
            (2000, 750),
        ]);
        assert_eq!(confidence_score(&aggregates), dec!(0.8));
    }

    #[test]
    fn test_high_variation() {
        // income CV = sqrt(5) ~2.24, expenses flat -> average ~1.12
        let aggregates = history(&[(6000, 500), (0, 500), (0, 500), (0, 500), (0, 500), (0, 500)]);
        assert_eq!(confidence_score(&aggregates), dec!(0.6));
    }

    #[test]
    fn test_upper_moderate_variation() {
        // income CV = 1, expense CV = 0.5 -> average 0.75
        let aggregates = history(&[
            (2000, 250),
            (0, 750),
            (2000, 250),
            (0, 750),
            (2000, 250),
            (0, 750),
        ]);
        assert_eq!(confidence_score(&aggregates), dec!(0.7));
    }
}
