//! Budget CLI commands
//!
//! Implements CLI commands for setting category budgets and checking
//! spending against them.

use clap::Subcommand;

use crate::display::format_budget_status;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

use super::Session;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set or replace the budget for a category
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "100" or "100.00")
        amount: String,
    },

    /// Show budget status for one category, or all of them
    Show {
        /// Category name
        category: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = Money::parse(&amount).map_err(|e| {
                LedgerError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '100' or '100.00'. Error: {}",
                    amount, e
                ))
            })?;

            session.ledger.set_budget(category.as_str(), amount)?;

            println!("Budget for '{}' set to {}", category, amount);
        }

        BudgetCommands::Show { category: Some(category) } => {
            match session.ledger.check_status(&category) {
                Some(status) => print!("{}", format_budget_status(&category, &status)),
                None => println!("No budget set for '{}'.", category),
            }
        }

        BudgetCommands::Show { category: None } => {
            let statuses = session.ledger.budget_statuses();
            if statuses.is_empty() {
                println!("No budgets set. Use 'fintrack budget set <CATEGORY> <AMOUNT>'.");
            }
            for (category, status) in &statuses {
                print!("{}", format_budget_status(category, status));
            }
        }
    }

    Ok(())
}
