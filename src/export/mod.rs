//! Export module for fintrack
//!
//! Provides data export in two formats:
//! - CSV: transactions in the store format, and budgets
//! - JSON: a machine-readable snapshot of the whole ledger

pub mod csv;
pub mod json;

pub use csv::export_budgets_csv;
pub use json::{export_full_json, LedgerSnapshot, EXPORT_SCHEMA_VERSION};
