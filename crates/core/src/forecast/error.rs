//! Forecast error types.

use ledgerly_shared::AppError;
use thiserror::Error;

/// Forecast-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// No transactions to build a baseline from.
    #[error("At least one historical transaction is required to forecast")]
    InsufficientData,

    /// A year-month string could not be parsed.
    #[error("Invalid year-month '{0}', expected YYYY-MM")]
    InvalidYearMonth(String),
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InsufficientData => Self::InsufficientData(err.to_string()),
            ForecastError::InvalidYearMonth(_) => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_app_error() {
        let err: AppError = ForecastError::InsufficientData.into();
        assert_eq!(err.error_code(), "INSUFFICIENT_DATA");

        let err: AppError = ForecastError::InvalidYearMonth("2025-13".into()).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
