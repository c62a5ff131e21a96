//! fintrack - personal finance ledger
//!
//! This library records dated income and expense transactions in a flat CSV
//! store and derives summaries from them: totals, category breakdowns,
//! monthly aggregates, spending trends and per-category budget status.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (money, transactions, budget status)
//! - `storage`: CSV store codec, atomic writes and the budget sidecar
//! - `services`: The [`Ledger`] and its queries and budget tracking
//! - `reports`: Spending, monthly and budget overview reports
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging of ledger mutations
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//! - `clock`: Source of "today" for time-relative queries
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use fintrack::models::TransactionInput;
//! use fintrack::Ledger;
//!
//! # fn main() -> fintrack::error::LedgerResult<()> {
//! let mut ledger = Ledger::load("transactions.csv")?;
//! ledger.add(TransactionInput::new(
//!     "2025-11-18", "Cash", "Food", "Lunch", "Expense", "12.50",
//! ))?;
//! ledger.save()?;
//!
//! println!("Balance: {}", ledger.balance());
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use services::Ledger;
