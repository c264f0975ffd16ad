//! Calendar-month bucketing of transactions.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{MonthlyAggregate, YearMonth};
use crate::transaction::{Transaction, TransactionType};

/// Sums absolute amounts per year-month, split by resolved type.
///
/// One entry per distinct year-month in the input, oldest first.
#[must_use]
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyAggregate> {
    let mut buckets: BTreeMap<YearMonth, (Decimal, Decimal)> = BTreeMap::new();

    for transaction in transactions {
        let (income, expenses) = buckets
            .entry(YearMonth::from_date(transaction.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match transaction.resolved_type() {
            TransactionType::Income => *income += transaction.absolute_amount(),
            TransactionType::Expense => *expenses += transaction.absolute_amount(),
        }
    }

    buckets
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyAggregate {
            month,
            month_index: month.month_index(),
            income,
            expenses,
        })
        .collect()
}
