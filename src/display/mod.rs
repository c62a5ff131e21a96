//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including tables, bars and status indicators.

pub mod report;
pub mod summary;
pub mod transaction;

pub use summary::{format_budget_status, format_summary, format_trend};
pub use transaction::{format_transaction_details, format_transaction_table, with_positions};
