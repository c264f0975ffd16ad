//! Point-in-time profitability metrics.
//!
//! This module provides pure business logic for summarising a transaction set:
//! - Income and expense totals
//! - Net profit and profit margin
//! - Per-category breakdown
//! - A fixed-precision text snapshot

pub mod service;
pub mod types;


pub use service::MetricsService;
pub use types::{CategoryAggregate, FinancialMetrics};
