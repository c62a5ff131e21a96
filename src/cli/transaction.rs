//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, searching and deleting
//! transactions.

use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_table, with_positions};
use crate::error::LedgerResult;
use crate::models::{parse_date, Transaction, TransactionInput, TransactionKind};

use super::Session;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Transaction date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Payment mode (e.g., "Cash", "Card")
        #[arg(long)]
        mode: String,
        /// Category name
        #[arg(long)]
        category: String,
        /// Sub-category or short description
        #[arg(long)]
        sub_category: String,
        /// "Income" or "Expense"
        #[arg(long)]
        kind: String,
        /// Amount (e.g., "12.50"); never negative
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Delete the transaction at a position shown by `list`
    Delete {
        /// Zero-based position
        index: usize,
    },

    /// List transactions
    List {
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        end: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by "Income" or "Expense"
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short)]
        n: Option<usize>,
    },

    /// Search sub-categories and notes (case-insensitive)
    Search {
        keyword: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(session: &mut Session, cmd: TransactionCommands) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            date,
            mode,
            category,
            sub_category,
            kind,
            amount,
            notes,
        } => {
            let input =
                TransactionInput::new(date, mode, category, sub_category, kind, amount).with_notes(notes);

            let ledger = &mut session.ledger;
            let index = ledger.len();
            ledger.add(input)?;
            ledger.save()?;

            if let Some(txn) = ledger.get(index) {
                println!("Added transaction #{}: {}", index, txn);
            }
        }

        TransactionCommands::Delete { index } => {
            let removed = session.ledger.delete(index)?;
            println!("Deleted transaction:");
            print!("{}", format_transaction_details(index, &removed));
        }

        TransactionCommands::List {
            start,
            end,
            category,
            kind,
        } => {
            let start = start.as_deref().map(parse_date).transpose()?;
            let end = end.as_deref().map(parse_date).transpose()?;
            let kind = kind.as_deref().map(str::parse::<TransactionKind>).transpose()?;

            let ledger = &session.ledger;
            let matches: Vec<&Transaction> = ledger
                .filter_by_date_range(start, end)
                .into_iter()
                .filter(|t| category.as_deref().map_or(true, |c| t.category() == c))
                .filter(|t| kind.map_or(true, |k| t.kind() == k))
                .collect();

            print!(
                "{}",
                format_transaction_table(&with_positions(ledger.transactions(), &matches))
            );
            if !matches.is_empty() {
                println!("{} of {} transactions", matches.len(), ledger.len());
            }
        }

        TransactionCommands::Recent { n } => {
            let n = n.unwrap_or(session.settings.recent_count);
            let ledger = &session.ledger;
            let recent = ledger.recent(n);
            let offset = ledger.len() - recent.len();

            let indexed: Vec<(usize, &Transaction)> = recent
                .iter()
                .enumerate()
                .map(|(i, t)| (offset + i, t))
                .collect();
            print!("{}", format_transaction_table(&indexed));
        }

        TransactionCommands::Search { keyword } => {
            let ledger = &session.ledger;
            let hits = ledger.search(&keyword)?;

            print!(
                "{}",
                format_transaction_table(&with_positions(ledger.transactions(), &hits))
            );
            if !hits.is_empty() {
                println!("{} match(es) for '{}'", hits.len(), keyword.trim());
            }
        }
    }

    Ok(())
}
