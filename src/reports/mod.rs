//! Reports module for fintrack
//!
//! Provides spending analysis by category, monthly summaries and a budget
//! overview. Each report renders for the terminal and exports to CSV.

pub mod budget_overview;
pub mod monthly;
pub mod spending;

pub use budget_overview::{BudgetOverviewReport, CategoryReportRow};
pub use monthly::{MonthRow, MonthlyReport};
pub use spending::{SpendingByCategory, SpendingBySubCategory, SpendingReport};
