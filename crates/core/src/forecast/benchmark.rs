//! Benchmark test for forecast performance.

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use ledgerly_shared::types::LedgerId;
    use rust_decimal::Decimal;
    use std::time::Instant;

    use crate::forecast::{ForecastEngine, LedgerTransactions};
    use crate::transaction::Transaction;

    /// Generate realistic test data: a few transactions per day over `days` days.
    fn generate_test_data(days: i64, per_day: i64) -> Vec<Transaction> {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let mut data = Vec::new();

        for day in 0..days {
            for i in 0..per_day {
                let cents = if i % 3 == 0 {
                    250_000 + day * 10
                } else {
                    -(40_000 + i * 500)
                };
                data.push(Transaction::new(
                    Decimal::new(cents, 2),
                    start + Duration::days(day),
                ));
            }
        }

        data
    }

    #[test]
    fn benchmark_forecast_three_years_daily_activity() {
        let data = generate_test_data(3 * 365, 20);
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let start = Instant::now();
        let forecast = ForecastEngine::generate_as_of(&data, 24, as_of).unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: {} transactions, 24-month forecast ===", data.len());
        println!("Duration: {:?}", duration);

        assert_eq!(forecast.projections.len(), 24);
        assert!(
            duration.as_millis() < 2000,
            "Forecast took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_batch_fifty_ledgers() {
        let ledgers: Vec<LedgerTransactions> = (0..50)
            .map(|_| LedgerTransactions {
                ledger_id: LedgerId::new(),
                transactions: generate_test_data(365, 10),
            })
            .collect();
        let as_of = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

        let start = Instant::now();
        let results = ForecastEngine::generate_batch(&ledgers, 12, as_of);
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 50 ledgers, 12-month forecast ===");
        println!("Duration: {:?}", duration);

        assert_eq!(results.len(), 50);
        assert!(results.iter().all(|r| r.result.is_ok()));
        assert!(
            duration.as_millis() < 5000,
            "Batch took {}ms, expected <5000ms",
            duration.as_millis()
        );
    }
}
