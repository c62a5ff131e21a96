//! Monthly Report
//!
//! Income, expenses and net balance for each calendar month, with a running
//! balance carried across months.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthlySummary};
use crate::services::Ledger;

/// One month of the report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRow {
    /// `YYYY-MM`
    pub month: String,
    pub summary: MonthlySummary,
    /// Sum of every month's balance up to and including this one
    pub running_balance: Money,
}

/// Monthly Report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Months in chronological order
    pub months: Vec<MonthRow>,
    pub total_income: Money,
    pub total_expense: Money,
}

impl MonthlyReport {
    /// Generate the monthly report over the whole ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let mut running_balance = Money::zero();
        let months = ledger
            .monthly_summary()
            .into_iter()
            .map(|(month, summary)| {
                running_balance += summary.balance;
                MonthRow {
                    month,
                    summary,
                    running_balance,
                }
            })
            .collect();

        Self {
            months,
            total_income: ledger.total_income(None, None),
            total_expense: ledger.total_expenses(None, None),
        }
    }

    pub fn net_balance(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Monthly Summary\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12} {:>14}\n",
            "Month", "Income", "Expense", "Balance", "Running"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.months {
            output.push_str(&format!(
                "{:<10} {:>12} {:>12} {:>12} {:>14}\n",
                row.month,
                row.summary.income,
                row.summary.expense,
                row.summary.balance,
                row.running_balance
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            self.total_income,
            self.total_expense,
            self.net_balance()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        csv.write_record(["Month", "Income", "Expense", "Balance", "Running Balance"])
            .map_err(export_err)?;

        for row in &self.months {
            csv.write_record([
                row.month.as_str(),
                row.summary.income.to_plain().as_str(),
                row.summary.expense.to_plain().as_str(),
                row.summary.balance.to_plain().as_str(),
                row.running_balance.to_plain().as_str(),
            ])
            .map_err(export_err)?;
        }

        csv.flush().map_err(|e| LedgerError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn demo_report() -> (TempDir, Ledger, MonthlyReport) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::load(temp_dir.path().join("transactions.csv")).unwrap();
        let report = MonthlyReport::generate(&ledger);
        (temp_dir, ledger, report)
    }

    #[test]
    fn test_months_are_chronological_with_running_balance() {
        let (_temp_dir, ledger, report) = demo_report();

        let months: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, ["2025-11", "2025-12"]);

        let last = report.months.last().unwrap();
        assert_eq!(last.running_balance, ledger.balance());
        assert_eq!(report.net_balance(), ledger.balance());
    }

    #[test]
    fn test_export_csv_row_per_month() {
        let (_temp_dir, _ledger, report) = demo_report();
        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Month,Income,Expense,Balance,Running Balance\n"));
    }

    #[test]
    fn test_format_terminal_lists_months() {
        let (_temp_dir, _ledger, report) = demo_report();
        let output = report.format_terminal();
        assert!(output.contains("2025-11"));
        assert!(output.contains("TOTAL"));
    }
}
