//! CLI command for data export
//!
//! Writes the ledger to a file as CSV (the store format) or as a JSON
//! snapshot, optionally with a separate budgets sheet.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::LedgerResult;
use crate::export::{export_budgets_csv, export_full_json};
use crate::storage::write_atomic;

use super::Session;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV in the ledger store format
    Csv,
    /// JSON snapshot with budgets and totals
    Json,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Also write budgets as CSV to this path
    #[arg(long)]
    pub budgets: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(session: &Session, args: ExportArgs) -> LedgerResult<()> {
    let ledger = &session.ledger;

    match args.format {
        ExportFormat::Csv => ledger.export(&args.output)?,
        ExportFormat::Json => {
            write_atomic(&args.output, |w| export_full_json(ledger, w, !args.compact))?
        }
    }

    println!(
        "Exported {} transactions to: {}",
        ledger.len(),
        args.output.display()
    );

    if let Some(path) = &args.budgets {
        write_atomic(path, |w| export_budgets_csv(ledger, w))?;
        println!(
            "Exported {} budgets to: {}",
            ledger.budgets().len(),
            path.display()
        );
    }
    Ok(())
}
