//! Financial metrics and cash-flow forecasting engine for Ledgerly.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Callers hand in already-decrypted transactions and get plain values back.
//!
//! # Modules
//!
//! - `transaction` - Transaction records, date ranges and income/expense classification
//! - `metrics` - Profitability snapshot and its text rendering
//! - `forecast` - Monthly aggregation, seasonality, projections and adjustment

pub mod forecast;
pub mod metrics;
pub mod transaction;

pub use forecast::{CashFlowForecast, ForecastAdjuster, ForecastEngine, ForecastError};
pub use metrics::{FinancialMetrics, MetricsService};
pub use transaction::{DateRange, Transaction, TransactionType};
