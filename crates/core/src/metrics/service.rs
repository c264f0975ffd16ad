//! Metrics calculation service.

use std::collections::HashMap;
use std::fmt::Write as _;

use ledgerly_shared::types::format_amount;
use rust_decimal::Decimal;

use super::types::{CategoryAggregate, FinancialMetrics};
use crate::transaction::{DateRange, Transaction, TransactionType};

/// Decimal places kept on the profit margin percentage.
const MARGIN_SCALE: u32 = 2;

/// Service for computing profitability metrics.
pub struct MetricsService;

impl MetricsService {
    /// Computes metrics for the transactions dated within `period`.
    ///
    /// Transactions outside the period are ignored, so an inverted period
    /// yields empty metrics.
    #[must_use]
    pub fn compute(transactions: &[Transaction], period: DateRange) -> FinancialMetrics {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        let mut categories = CategoryTotals::default();

        for transaction in period.filter(transactions) {
            let amount = transaction.absolute_amount();
            match transaction.resolved_type() {
                TransactionType::Income => total_income += amount,
                TransactionType::Expense => total_expenses += amount,
            }
            categories.add(transaction.category_label(), amount);
        }

        let net_profit = total_income - total_expenses;

        FinancialMetrics {
            total_income,
            total_expenses,
            net_profit,
            profit_margin: Self::profit_margin(net_profit, total_income),
            period,
            category_breakdown: categories.into_sorted(),
        }
    }

    /// Net profit as a percentage of income, or zero without income.
    #[must_use]
    pub fn profit_margin(net_profit: Decimal, total_income: Decimal) -> Decimal {
        if total_income > Decimal::ZERO {
            (net_profit / total_income * Decimal::ONE_HUNDRED).round_dp(MARGIN_SCALE)
        } else {
            Decimal::ZERO
        }
    }

    /// Renders the metrics as a human-readable report.
    ///
    /// Downstream consumers match on the `Income:`, `Expenses:`,
    /// `Net Profit:` and `Profit Margin:` labels; keep them verbatim.
    #[must_use]
    pub fn render_snapshot(metrics: &FinancialMetrics) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Financial Snapshot ({})", metrics.period);
        let _ = writeln!(out, "Income: {}", format_amount(metrics.total_income));
        let _ = writeln!(out, "Expenses: {}", format_amount(metrics.total_expenses));
        let _ = writeln!(out, "Net Profit: {}", format_amount(metrics.net_profit));
        let _ = writeln!(
            out,
            "Profit Margin: {}%",
            format_amount(metrics.profit_margin)
        );

        if !metrics.category_breakdown.is_empty() {
            out.push_str("Categories:\n");
            for aggregate in &metrics.category_breakdown {
                let _ = writeln!(
                    out,
                    "  {}: {} ({} transactions)",
                    aggregate.category,
                    format_amount(aggregate.total),
                    aggregate.count
                );
            }
        }

        out
    }
}

/// Running per-category totals that remember first-seen order.
#[derive(Default)]
struct CategoryTotals {
    index: HashMap<String, usize>,
    entries: Vec<CategoryAggregate>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: Decimal) {
        let slot = match self.index.get(category) {
            Some(&slot) => slot,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryAggregate {
                    category: category.to_string(),
                    total: Decimal::ZERO,
                    count: 0,
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[slot];
        entry.total += amount;
        entry.count += 1;
    }

    /// Largest total first; equal totals keep first-seen order.
    fn into_sorted(mut self) -> Vec<CategoryAggregate> {
        self.entries.sort_by(|a, b| b.total.cmp(&a.total));
        self.entries
    }
}
