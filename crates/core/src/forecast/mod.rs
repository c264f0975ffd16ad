//! Cash-flow forecasting.
//!
//! Pipeline: monthly aggregation, seasonal pattern detection, baseline
//! projection with confidence scoring, and later adjustment against realized
//! results. Every step is a pure function of its inputs.

pub mod adjustment;
pub mod aggregation;
pub mod cache;
pub mod confidence;
pub mod engine;
pub mod error;
pub mod seasonal;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod benchmark;

pub use adjustment::{ForecastAdjuster, ProjectionScale};
pub use aggregation::aggregate_by_month;
pub use cache::{CachedForecast, ForecastCache};
pub use confidence::confidence_score;
pub use engine::{ForecastEngine, LedgerForecast, LedgerTransactions};
pub use error::ForecastError;
pub use seasonal::detect_seasonal_patterns;
pub use types::{
    CashFlowForecast, ForecastSummary, MonthlyAggregate, MonthlyProjection, SeasonalFactor,
    YearMonth,
};
