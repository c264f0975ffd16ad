//! Forecast result caching using Moka.
//!
//! Wraps the pure [`ForecastEngine`] so repeated dashboard requests for the
//! same ledger and horizon skip recomputation. The engine itself stays
//! stateless; invalidation (e.g. after a new transaction is recorded) is the
//! caller's job.

use chrono::NaiveDate;
use ledgerly_shared::config::CacheSettings;
use ledgerly_shared::types::LedgerId;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::engine::ForecastEngine;
use super::error::ForecastError;
use super::types::{CashFlowForecast, YearMonth};
use crate::transaction::Transaction;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Forecasts only depend on the month of the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ForecastKey {
    ledger_id: LedgerId,
    horizon_months: u32,
    as_of: YearMonth,
}

/// A forecast together with where it came from.
#[derive(Debug, Clone)]
pub struct CachedForecast {
    /// The forecast.
    pub forecast: CashFlowForecast,
    /// Whether this result was returned from cache.
    pub cached: bool,
}

/// Cache for forecast results.
///
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct ForecastCache {
    cache: Cache<ForecastKey, Arc<CashFlowForecast>>,
}

impl ForecastCache {
    /// Creates a new forecast cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a forecast cache from application settings.
    #[must_use]
    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::with_config(settings.max_capacity, settings.ttl_secs)
    }

    /// Creates a new forecast cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Returns the ledger's forecast, generating and caching it on a miss.
    ///
    /// Failed generations are not cached.
    pub fn get_or_generate(
        &self,
        ledger_id: LedgerId,
        transactions: &[Transaction],
        horizon_months: u32,
        as_of: NaiveDate,
    ) -> Result<CachedForecast, ForecastError> {
        let key = ForecastKey {
            ledger_id,
            horizon_months,
            as_of: YearMonth::from_date(as_of),
        };

        if let Some(hit) = self.cache.get(&key) {
            debug!(%ledger_id, horizon_months, "Forecast cache hit");
            return Ok(CachedForecast {
                forecast: (*hit).clone(),
                cached: true,
            });
        }

        debug!(%ledger_id, horizon_months, "Forecast cache miss");
        let forecast = ForecastEngine::generate_as_of(transactions, horizon_months, as_of)?;
        self.cache.insert(key, Arc::new(forecast.clone()));

        Ok(CachedForecast {
            forecast,
            cached: false,
        })
    }

    /// Drops every cached forecast of one ledger.
    pub fn invalidate_ledger(&self, ledger_id: LedgerId) {
        self.cache.run_pending_tasks();
        let stale: Vec<Arc<ForecastKey>> = self
            .cache
            .iter()
            .filter(|(key, _)| key.ledger_id == ledger_id)
            .map(|(key, _)| key)
            .collect();
        for key in stale {
            self.cache.invalidate(&*key);
        }
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka expires entries in the background; calling this reclaims memory
    /// sooner and makes `entry_count` current.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::new()
    }
}
