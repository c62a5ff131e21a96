//! CLI commands for reports
//!
//! Provides commands for generating and exporting the financial reports.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::models::parse_date;
use crate::reports::{BudgetOverviewReport, MonthlyReport, SpendingReport};
use crate::storage::write_atomic;

use super::Session;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate a spending report by category
    Spending {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), inclusive
        #[arg(short, long)]
        end: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Generate income, expense and balance per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a budget overview report
    #[command(alias = "budget-overview")]
    Budget {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(session: &Session, cmd: ReportCommands) -> LedgerResult<()> {
    let ledger = &session.ledger;

    match cmd {
        ReportCommands::Spending {
            start,
            end,
            output,
            top,
        } => {
            let start = start.as_deref().map(parse_date).transpose()?;
            let end = end.as_deref().map(parse_date).transpose()?;
            let report = SpendingReport::generate(ledger, start, end);

            if let Some(path) = output {
                write_atomic(&path, |w| report.export_csv(w))?;
                print_exported("Spending", &path);
            } else if let Some(n) = top {
                println!("Top {} Spending Categories\n", n);
                println!("{:<35} {:>12} {:>8}", "Category", "Amount", "%");
                println!("{}", "-".repeat(60));

                for cat in report.top_categories(n) {
                    println!(
                        "{:<35} {:>12} {:>7.1}%",
                        cat.category, cat.total_spending, cat.percentage
                    );
                }
                println!("\nTotal Spending: {}", report.total_spending);
            } else {
                println!("{}", report.format_terminal());
            }
        }

        ReportCommands::Monthly { output } => {
            let report = MonthlyReport::generate(ledger);

            if let Some(path) = output {
                write_atomic(&path, |w| report.export_csv(w))?;
                print_exported("Monthly", &path);
            } else {
                println!("{}", report.format_terminal());
            }
        }

        ReportCommands::Budget { output } => {
            let report = BudgetOverviewReport::generate(ledger);

            if let Some(path) = output {
                write_atomic(&path, |w| report.export_csv(w))?;
                print_exported("Budget", &path);
            } else {
                println!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

fn print_exported(report: &str, path: &Path) {
    println!("{} report exported to: {}", report, path.display());
}
