//! Budget Overview Report
//!
//! Shows every budgeted category with its ceiling, all-time spending and
//! what remains.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetStatus, Money};
use crate::services::Ledger;

/// A row in the budget report for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReportRow {
    pub category: String,
    pub status: BudgetStatus,
}

impl CategoryReportRow {
    /// Check if this category is overspent
    pub fn is_overspent(&self) -> bool {
        self.status.over_budget
    }
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// Budgeted categories in category order
    pub categories: Vec<CategoryReportRow>,
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    /// Expenses in categories that have no budget
    pub unbudgeted_spending: Money,
}

impl BudgetOverviewReport {
    /// Generate a budget overview from the ledger's current budgets
    pub fn generate(ledger: &Ledger) -> Self {
        let categories: Vec<CategoryReportRow> = ledger
            .budget_statuses()
            .into_iter()
            .map(|(category, status)| CategoryReportRow { category, status })
            .collect();

        let total_budgeted = categories.iter().map(|c| c.status.budget).sum();
        let total_spent: Money = categories.iter().map(|c| c.status.spent).sum();

        let unbudgeted_spending = ledger
            .expense_by_category(None, None)
            .into_iter()
            .filter(|(category, _)| ledger.get_budget(category).is_none())
            .map(|(_, spent)| spent)
            .sum();

        Self {
            categories,
            total_budgeted,
            total_spent,
            total_remaining: total_budgeted - total_spent,
            unbudgeted_spending,
        }
    }

    /// Check if any category is overspent
    pub fn has_overspent(&self) -> bool {
        self.categories.iter().any(CategoryReportRow::is_overspent)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No budgets set. Use 'fintrack budget set <CATEGORY> <AMOUNT>'.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12} {:>8}\n",
            "Category", "Budget", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.categories {
            let remaining_display = if row.is_overspent() {
                format!("{} *", row.status.remaining)
            } else {
                row.status.remaining.to_string()
            };

            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12} {:>7.1}%\n",
                row.category,
                row.status.budget,
                row.status.spent,
                remaining_display,
                row.status.percentage
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "TOTAL", self.total_budgeted, self.total_spent, self.total_remaining
        ));

        if !self.unbudgeted_spending.is_zero() {
            output.push_str(&format!(
                "\nSpending in categories without a budget: {}\n",
                self.unbudgeted_spending
            ));
        }

        if self.has_overspent() {
            output.push_str("\n* = Over budget\n");
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        csv.write_record(["Category", "Budget", "Spent", "Remaining", "Percentage", "Over Budget"])
            .map_err(export_err)?;

        for row in &self.categories {
            csv.write_record([
                row.category.as_str(),
                row.status.budget.to_plain().as_str(),
                row.status.spent.to_plain().as_str(),
                row.status.remaining.to_plain().as_str(),
                format!("{:.2}", row.status.percentage).as_str(),
                if row.is_overspent() { "yes" } else { "no" },
            ])
            .map_err(export_err)?;
        }

        csv.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}
