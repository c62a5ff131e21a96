//! Spending Report
//!
//! Breaks expenses down by category and sub-category for an optional date
//! range.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::Ledger;

/// Spending on one sub-category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingBySubCategory {
    pub sub_category: String,
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending on one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: String,
    /// Sub-categories with spending, largest first
    pub sub_categories: Vec<SpendingBySubCategory>,
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Categories with spending, largest first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_income: Money,
    /// Expense transactions counted
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Generate a spending report for an optional inclusive date range
    pub fn generate(ledger: &Ledger, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        let mut by_category: BTreeMap<&str, BTreeMap<&str, (Money, usize)>> = BTreeMap::new();
        let mut total_transactions = 0;

        for txn in ledger
            .filter_by_date_range(start_date, end_date)
            .into_iter()
            .filter(|t| t.is_expense())
        {
            let entry = by_category
                .entry(txn.category())
                .or_default()
                .entry(txn.sub_category())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount();
            entry.1 += 1;
            total_transactions += 1;
        }

        let total_spending = ledger.total_expenses(start_date, end_date);

        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category, subs)| {
                let mut sub_categories: Vec<SpendingBySubCategory> = subs
                    .into_iter()
                    .map(|(sub_category, (spent, count))| SpendingBySubCategory {
                        sub_category: sub_category.to_string(),
                        total_spending: spent,
                        transaction_count: count,
                        percentage: share(spent, total_spending),
                    })
                    .collect();
                sub_categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

                let spent: Money = sub_categories.iter().map(|s| s.total_spending).sum();
                SpendingByCategory {
                    category: category.to_string(),
                    transaction_count: sub_categories.iter().map(|s| s.transaction_count).sum(),
                    sub_categories,
                    total_spending: spent,
                    percentage: share(spent, total_spending),
                }
            })
            .collect();

        // Stable sort keeps alphabetical order among equal totals
        categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

        Self {
            start_date,
            end_date,
            categories,
            total_spending,
            total_income: ledger.total_income(start_date, end_date),
            total_transactions,
        }
    }

    fn range_label(&self) -> String {
        match (self.start_date, self.end_date) {
            (None, None) => "all time".to_string(),
            (Some(s), None) => format!("{} onwards", s),
            (None, Some(e)) => format!("up to {}", e),
            (Some(s), Some(e)) => format!("{} to {}", s, e),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Report: {}\n", self.range_label()));
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!("Total Spending: {}\n", self.total_spending));
        output.push_str(&format!("Total Income: {}\n", self.total_income));
        output.push_str(&format!("Total Transactions: {}\n\n", self.total_transactions));

        if self.categories.is_empty() {
            output.push_str("No spending recorded in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<35} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "\n{} ({:.1}%)\n",
                category.category.to_uppercase(),
                category.percentage
            ));

            for sub in &category.sub_categories {
                output.push_str(&format!(
                    "  {:<33} {:>12} {:>8} {:>7.1}%\n",
                    sub.sub_category, sub.total_spending, sub.transaction_count, sub.percentage
                ));
            }

            output.push_str(&format!(
                "  {:<33} {:>12} {:>8}\n",
                "Category Total:", category.total_spending, category.transaction_count
            ));
        }

        output.push_str(&"-".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:<35} {:>12} {:>8}\n",
            "TOTAL SPENDING", self.total_spending, self.total_transactions
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        let start = self.start_date.map(|d| d.to_string()).unwrap_or_default();
        let end = self.end_date.map(|d| d.to_string()).unwrap_or_default();

        csv.write_record([
            "Start Date",
            "End Date",
            "Category",
            "Sub Category",
            "Amount",
            "Transaction Count",
            "Percentage",
        ])
        .map_err(export_err)?;

        for category in &self.categories {
            for sub in &category.sub_categories {
                csv.write_record([
                    start.as_str(),
                    end.as_str(),
                    category.category.as_str(),
                    sub.sub_category.as_str(),
                    sub.total_spending.to_plain().as_str(),
                    sub.transaction_count.to_string().as_str(),
                    format!("{:.2}", sub.percentage).as_str(),
                ])
                .map_err(export_err)?;
            }
        }

        csv.write_record([
            start.as_str(),
            end.as_str(),
            "TOTAL",
            "",
            self.total_spending.to_plain().as_str(),
            self.total_transactions.to_string().as_str(),
            if self.total_spending.is_zero() { "0.00" } else { "100.00" },
        ])
        .map_err(export_err)?;

        csv.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> &[SpendingByCategory] {
        &self.categories[..limit.min(self.categories.len())]
    }
}

fn share(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 * 100.0 / total.cents() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(
            &path,
            "Date,Mode,Category,Sub Category,Income/Expense,Amount,Notes\n",
        )
        .unwrap();
        let mut ledger = Ledger::load(&path).unwrap();

        for (date, category, sub, kind, amount) in [
            ("2025-01-01", "Allowance", "From Parents", "Income", "2000"),
            ("2025-01-10", "Food", "Groceries", "Expense", "50"),
            ("2025-01-12", "Food", "Groceries", "Expense", "10"),
            ("2025-01-15", "Food", "Dining Out", "Expense", "30"),
            ("2025-01-20", "Transportation", "Bus, Metro", "Expense", "10"),
            ("2025-02-01", "Food", "Groceries", "Expense", "99"),
        ] {
            ledger
                .add(TransactionInput::new(date, "Cash", category, sub, kind, amount))
                .unwrap();
        }
        (temp_dir, ledger)
    }

    fn january() -> (Option<NaiveDate>, Option<NaiveDate>) {
        (
            NaiveDate::from_ymd_opt(2025, 1, 1),
            NaiveDate::from_ymd_opt(2025, 1, 31),
        )
    }

    #[test]
    fn test_generate_spending_report() {
        let (_temp_dir, ledger) = create_test_ledger();
        let (start, end) = january();

        let report = SpendingReport::generate(&ledger, start, end);

        assert_eq!(report.total_spending, Money::from_cents(10000));
        assert_eq!(report.total_income, Money::from_cents(200000));
        assert_eq!(report.total_transactions, 4);
        assert_eq!(report.categories.len(), 2);

        let food = &report.categories[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.total_spending, Money::from_cents(9000));
        assert_eq!(food.transaction_count, 3);
        assert_eq!(food.percentage, 90.0);
        assert_eq!(food.sub_categories[0].sub_category, "Groceries");
        assert_eq!(food.sub_categories[0].transaction_count, 2);
    }

    #[test]
    fn test_category_totals_match_ledger() {
        let (_temp_dir, ledger) = create_test_ledger();
        let report = SpendingReport::generate(&ledger, None, None);

        let expected = ledger.expense_by_category(None, None);
        for category in &report.categories {
            assert_eq!(expected[&category.category], category.total_spending);
        }
    }

    #[test]
    fn test_top_categories() {
        let (_temp_dir, ledger) = create_test_ledger();
        let report = SpendingReport::generate(&ledger, None, None);

        assert_eq!(report.top_categories(1).len(), 1);
        assert_eq!(report.top_categories(1)[0].category, "Food");
        assert_eq!(report.top_categories(10).len(), 2);
    }

    #[test]
    fn test_export_csv_quotes_fields() {
        let (_temp_dir, ledger) = create_test_ledger();
        let (start, end) = january();
        let report = SpendingReport::generate(&ledger, start, end);

        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Start Date,End Date,Category,Sub Category,Amount"));
        assert!(text.contains("2025-01-01,2025-01-31,Transportation,\"Bus, Metro\",10.00,1,10.00"));
        assert!(text.contains("TOTAL,,100.00,4,100.00"));
    }

    #[test]
    fn test_format_terminal_empty_period() {
        let (_temp_dir, ledger) = create_test_ledger();
        let report = SpendingReport::generate(&ledger, NaiveDate::from_ymd_opt(2030, 1, 1), None);

        let output = report.format_terminal();
        assert!(output.contains("2030-01-01 onwards"));
        assert!(output.contains("No spending recorded"));
    }
}
