//! Forecast engine for projecting future cash flow.

use chrono::{NaiveDate, Utc};
use ledgerly_shared::types::LedgerId;
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use super::aggregation::aggregate_by_month;
use super::confidence::confidence_score;
use super::error::ForecastError;
use super::seasonal::detect_seasonal_patterns;
use super::stats::mean;
use super::types::{
    CashFlowForecast, MonthlyAggregate, MonthlyProjection, SeasonalFactor, YearMonth,
};
use crate::transaction::Transaction;

/// Decimal places kept on projected amounts.
pub const PROJECTION_SCALE: u32 = 4;

/// Transactions of one ledger, input to batch generation.
#[derive(Debug, Clone)]
pub struct LedgerTransactions {
    /// Ledger the transactions belong to.
    pub ledger_id: LedgerId,
    /// The ledger's transaction history.
    pub transactions: Vec<Transaction>,
}

/// Outcome of forecasting one ledger in a batch.
#[derive(Debug, Clone)]
pub struct LedgerForecast {
    /// Ledger the forecast belongs to.
    pub ledger_id: LedgerId,
    /// Forecast, or why none could be produced.
    pub result: Result<CashFlowForecast, ForecastError>,
}

/// Engine for generating cash-flow forecasts.
pub struct ForecastEngine;

impl ForecastEngine {
    /// Forecasts `horizon_months` months starting the month after today (UTC).
    pub fn generate(
        transactions: &[Transaction],
        horizon_months: u32,
    ) -> Result<CashFlowForecast, ForecastError> {
        Self::generate_as_of(transactions, horizon_months, Utc::now().date_naive())
    }

    /// Forecasts `horizon_months` months starting the month after `as_of`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InsufficientData`] when `transactions` is empty.
    pub fn generate_as_of(
        transactions: &[Transaction],
        horizon_months: u32,
        as_of: NaiveDate,
    ) -> Result<CashFlowForecast, ForecastError> {
        if transactions.is_empty() {
            return Err(ForecastError::InsufficientData);
        }

        let monthly = aggregate_by_month(transactions);
        let seasonal_factors = detect_seasonal_patterns(&monthly);
        let (baseline_income, baseline_expenses) = Self::calculate_baseline(&monthly);

        let mut projections = Vec::with_capacity(horizon_months as usize);
        let mut month = YearMonth::from_date(as_of);
        for _ in 0..horizon_months {
            month = month.following();
            projections.push(Self::project_month(
                month,
                baseline_income,
                baseline_expenses,
                &seasonal_factors,
            ));
        }

        let confidence = confidence_score(&monthly);

        debug!(
            transactions = transactions.len(),
            history_months = monthly.len(),
            seasonal_months = seasonal_factors.len(),
            horizon_months,
            %confidence,
            "Generated cash-flow forecast"
        );

        Ok(CashFlowForecast {
            projections,
            confidence,
            assumptions: Self::assumptions(transactions.len(), &monthly, &seasonal_factors),
            seasonal_factors,
        })
    }

    /// Forecasts several ledgers in parallel.
    ///
    /// Results come back in input order; one ledger failing does not affect
    /// the others.
    #[must_use]
    pub fn generate_batch(
        ledgers: &[LedgerTransactions],
        horizon_months: u32,
        as_of: NaiveDate,
    ) -> Vec<LedgerForecast> {
        let results: Vec<LedgerForecast> = ledgers
            .par_iter()
            .map(|ledger| LedgerForecast {
                ledger_id: ledger.ledger_id,
                result: Self::generate_as_of(&ledger.transactions, horizon_months, as_of),
            })
            .collect();

        debug!(
            ledgers = results.len(),
            failed = results.iter().filter(|r| r.result.is_err()).count(),
            "Generated batch forecasts"
        );

        results
    }

    /// Mean monthly income and expenses across all months of history.
    #[must_use]
    pub fn calculate_baseline(monthly: &[MonthlyAggregate]) -> (Decimal, Decimal) {
        let incomes: Vec<Decimal> = monthly.iter().map(|m| m.income).collect();
        let expenses: Vec<Decimal> = monthly.iter().map(|m| m.expenses).collect();
        (mean(&incomes), mean(&expenses))
    }

    /// Applies the month's seasonal factors to the baseline, if it has any.
    fn project_month(
        month: YearMonth,
        baseline_income: Decimal,
        baseline_expenses: Decimal,
        seasonal_factors: &[SeasonalFactor],
    ) -> MonthlyProjection {
        let (income, expenses) = match SeasonalFactor::lookup(seasonal_factors, month.month_index())
        {
            Some(factor) => (
                baseline_income * factor.income_factor,
                baseline_expenses * factor.expense_factor,
            ),
            None => (baseline_income, baseline_expenses),
        };

        MonthlyProjection::new(
            month,
            income.round_dp(PROJECTION_SCALE),
            expenses.round_dp(PROJECTION_SCALE),
        )
    }

    fn assumptions(
        transaction_count: usize,
        monthly: &[MonthlyAggregate],
        seasonal_factors: &[SeasonalFactor],
    ) -> Vec<String> {
        vec![
            format!("Based on {transaction_count} historical transactions"),
            format!(
                "Baseline averages use {} months of history",
                monthly.len()
            ),
            format!(
                "Seasonal adjustments applied where patterns were detected ({} of 12 calendar months observed)",
                seasonal_factors.len()
            ),
            "Assumes business conditions remain stable".to_string(),
        ]
    }
}
