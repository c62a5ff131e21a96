//! Storage layer for fintrack
//!
//! Provides the CSV transaction store, atomic file writes, the budget
//! sidecar file and first-run seed data.

pub mod budgets;
pub mod file_io;
pub mod seed;
pub mod transactions;

pub use budgets::{load_budgets, save_budgets, BudgetMap};
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use seed::demo_transactions;
pub use transactions::{load_transactions, read_transactions, save_transactions, write_transactions};
