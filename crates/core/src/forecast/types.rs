//! Forecast data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ForecastError;

/// A calendar month of a specific year, ordered chronologically.
///
/// Serialised as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month; `month` is 1-based.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The year-month a date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Calendar month, 1-12.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Calendar month, 0-11.
    #[must_use]
    pub const fn month_index(self) -> u32 {
        self.month - 1
    }

    /// The month after this one.
    #[must_use]
    pub const fn following(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ForecastError::InvalidYearMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Income and expense totals for one year-month of history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// The year-month.
    pub month: YearMonth,
    /// Calendar month, 0-11.
    pub month_index: u32,
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expenses: Decimal,
}

/// Multiplicative adjustment for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalFactor {
    /// Calendar month, 0-11.
    pub month_index: u32,
    /// Mean income of this month relative to the overall mean.
    pub income_factor: Decimal,
    /// Mean expenses of this month relative to the overall mean.
    pub expense_factor: Decimal,
}

impl SeasonalFactor {
    /// Finds the factor for a calendar month, if one was observed.
    #[must_use]
    pub fn lookup(factors: &[Self], month_index: u32) -> Option<&Self> {
        factors.iter().find(|f| f.month_index == month_index)
    }
}

/// Projected totals for one future month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// The projected year-month.
    pub month: YearMonth,
    /// Projected income.
    pub projected_income: Decimal,
    /// Projected expenses.
    pub projected_expenses: Decimal,
    /// Always `projected_income - projected_expenses`.
    pub projected_net_cash_flow: Decimal,
}

impl MonthlyProjection {
    /// Builds a projection, deriving the net cash flow from its parts.
    #[must_use]
    pub fn new(month: YearMonth, projected_income: Decimal, projected_expenses: Decimal) -> Self {
        Self {
            month,
            projected_income,
            projected_expenses,
            projected_net_cash_flow: projected_income - projected_expenses,
        }
    }
}

/// Multi-month cash-flow projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowForecast {
    /// One projection per requested month, in order.
    pub projections: Vec<MonthlyProjection>,
    /// Confidence score between 0 and 1.
    pub confidence: Decimal,
    /// Seasonal factors for the calendar months seen in history.
    pub seasonal_factors: Vec<SeasonalFactor>,
    /// Human-readable assumptions behind the forecast.
    pub assumptions: Vec<String>,
}

impl CashFlowForecast {
    /// Totals across the whole horizon.
    #[must_use]
    pub fn summary(&self) -> ForecastSummary {
        let total_projected_income: Decimal =
            self.projections.iter().map(|p| p.projected_income).sum();
        let total_projected_expenses: Decimal =
            self.projections.iter().map(|p| p.projected_expenses).sum();

        ForecastSummary {
            total_projected_income,
            total_projected_expenses,
            projected_net_cash_flow: total_projected_income - total_projected_expenses,
        }
    }
}

/// Horizon totals of a forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Total projected income.
    pub total_projected_income: Decimal,
    /// Total projected expenses.
    pub total_projected_expenses: Decimal,
    /// Projected net cash flow (income - expenses).
    pub projected_net_cash_flow: Decimal,
}
