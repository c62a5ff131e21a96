//! Core data models for fintrack
//!
//! This module contains the data structures of the ledger domain:
//! money amounts, transactions, budget status and derived summaries.

pub mod budget;
pub mod money;
pub mod summary;
pub mod transaction;

pub use budget::BudgetStatus;
pub use money::{Money, MoneyParseError};
pub use summary::{MonthlySummary, TrendPoint};
pub use transaction::{
    parse_date, Transaction, TransactionInput, TransactionKind, TransactionRecord, DATE_FORMAT,
    STORE_COLUMNS,
};
