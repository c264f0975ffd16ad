//! Metrics data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::DateRange;

/// Total and count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    /// Category label.
    pub category: String,
    /// Sum of absolute amounts (never negative).
    pub total: Decimal,
    /// Number of transactions in the category.
    pub count: u64,
}

/// Profitability snapshot for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Sum of income amounts.
    pub total_income: Decimal,
    /// Sum of expense amounts.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_profit: Decimal,
    /// Net profit as a percentage of income; zero when there is no income.
    pub profit_margin: Decimal,
    /// Period the metrics cover.
    pub period: DateRange,
    /// Categories ordered by total, largest first.
    pub category_breakdown: Vec<CategoryAggregate>,
}

impl FinancialMetrics {
    /// All-zero metrics for a period with no activity.
    #[must_use]
    pub fn empty(period: DateRange) -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            profit_margin: Decimal::ZERO,
            period,
            category_breakdown: Vec::new(),
        }
    }
}
