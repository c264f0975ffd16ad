//! Income/expense classification.

use rust_decimal::Decimal;

use super::types::{Transaction, TransactionType};

/// Classifies a transaction.
///
/// An explicit type always wins. Otherwise positive amounts are income and
/// everything else (zero included) is an expense.
#[must_use]
pub fn classify(transaction: &Transaction) -> TransactionType {
    match transaction.transaction_type {
        Some(explicit) => explicit,
        None if transaction.amount > Decimal::ZERO => TransactionType::Income,
        None => TransactionType::Expense,
    }
}
