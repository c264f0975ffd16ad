//! Ledgerly forecast runner.
//!
//! Reads a JSON array of transactions (as exported by the transaction store),
//! prints the profitability snapshot for the export's full date span, then the
//! cash-flow forecast as JSON.
//!
//! Usage: ledgerly-forecast <transactions.json> [horizon-months]

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerly_core::{DateRange, ForecastEngine, MetricsService, Transaction};
use ledgerly_shared::{AppConfig, AppError};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: ledgerly-forecast <transactions.json> [horizon-months]");
    };
    let horizon_months = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid horizon '{raw}'"))?,
        None => config.forecast.horizon_months,
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let transactions: Vec<Transaction> =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {path}"))?;
    info!(count = transactions.len(), %path, "Loaded transactions");

    if let Some(span) = DateRange::spanning(&transactions) {
        let metrics = MetricsService::compute(&transactions, span);
        println!("{}", MetricsService::render_snapshot(&metrics));
    }

    let forecast =
        ForecastEngine::generate(&transactions, horizon_months).map_err(AppError::from)?;
    info!(
        horizon_months,
        confidence = %forecast.confidence,
        "Forecast ready"
    );
    println!("{}", serde_json::to_string_pretty(&forecast)?);

    let summary = forecast.summary();
    println!(
        "Projected over {horizon_months} months: income {}, expenses {}, net {}",
        ledgerly_shared::types::format_amount(summary.total_projected_income),
        ledgerly_shared::types::format_amount(summary.total_projected_expenses),
        ledgerly_shared::types::format_amount(summary.projected_net_cash_flow),
    );

    Ok(())
}
