//! Transaction data types.

use chrono::NaiveDate;
use ledgerly_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::classifier::classify;

/// Category label used when a transaction has none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether a money movement is income or an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A dated, signed money movement supplied by the transaction store.
///
/// The engine only reads these; amounts are already decrypted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Signed amount. The sign is only consulted when `transaction_type` is absent.
    pub amount: Decimal,
    /// Explicit classification, if the caller recorded one.
    #[serde(default, rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Free-text category.
    #[serde(default)]
    pub category: Option<String>,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Creates an unlabeled transaction with a fresh ID.
    #[must_use]
    pub fn new(amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            transaction_type: None,
            category: None,
            date,
            description: None,
        }
    }

    /// Sets the explicit classification.
    #[must_use]
    pub fn with_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the classification, falling back to the amount's sign.
    #[must_use]
    pub fn resolved_type(&self) -> TransactionType {
        classify(self)
    }

    /// Returns the unsigned amount.
    #[must_use]
    pub fn absolute_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Returns the category, or [`UNCATEGORIZED`] when missing or blank.
    #[must_use]
    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => UNCATEGORIZED,
        }
    }
}

/// Inclusive date window.
///
/// A range whose start is after its end is accepted and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start_date: NaiveDate,
    /// Last day included.
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Smallest range covering every transaction's date, if any.
    #[must_use]
    pub fn spanning(transactions: &[Transaction]) -> Option<Self> {
        let start = transactions.iter().map(|t| t.date).min()?;
        let end = transactions.iter().map(|t| t.date).max()?;
        Some(Self::new(start, end))
    }

    /// Returns true if the start is after the end.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Returns true if `date` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the transactions dated within the range, in input order.
    #[must_use]
    pub fn filter<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date))
            .collect()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}
