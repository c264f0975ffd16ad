//! Transaction records and income/expense classification.

pub mod classifier;
pub mod types;

pub use classifier::classify;
pub use types::{DateRange, Transaction, TransactionType, UNCATEGORIZED};
