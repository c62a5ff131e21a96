//! Service layer for fintrack
//!
//! The [`Ledger`] owns the transaction sequence and is the single entry point
//! for mutation. Queries and budget tracking are split into their own files
//! as further `impl Ledger` blocks.

pub mod analytics;
pub mod budget;
pub mod ledger;

pub use budget::BudgetTracker;
pub use ledger::Ledger;
