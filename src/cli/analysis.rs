//! Summary and trend CLI commands

use clap::Subcommand;

use crate::display::{format_summary, format_trend};
use crate::error::LedgerResult;

use super::Session;

/// Analysis subcommands
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Show total income, expenses, balance and spending by category
    Summary,

    /// Show daily spending over a recent window
    Trend {
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,
        /// Window length in days, counted back from today
        #[arg(short, long)]
        days: Option<u32>,
    },
}

/// Handle an analysis command
pub fn handle_analysis_command(session: &Session, cmd: AnalysisCommands) -> LedgerResult<()> {
    let ledger = &session.ledger;

    match cmd {
        AnalysisCommands::Summary => {
            print!(
                "{}",
                format_summary(
                    ledger.total_income(None, None),
                    ledger.total_expenses(None, None),
                    ledger.balance(),
                    &ledger.expense_by_category(None, None),
                )
            );
        }

        AnalysisCommands::Trend { category, days } => {
            let days = days.unwrap_or(session.settings.trend_days);
            let points = ledger.spending_trend(category.as_deref(), days);
            print!("{}", format_trend(&points, category.as_deref(), days));
        }
    }

    Ok(())
}
