//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod analysis;
pub mod budget;
pub mod export;
pub mod history;
pub mod report;
pub mod transaction;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{audit_log_for, budgets_file_for, FintrackPaths, Settings};
use crate::error::LedgerResult;
use crate::services::Ledger;

pub use analysis::{handle_analysis_command, AnalysisCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::handle_history_command;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

/// State shared by every command: the opened ledger and the user's settings
#[derive(Debug)]
pub struct Session {
    pub ledger: Ledger,
    pub settings: Settings,
    pub paths: FintrackPaths,
    audit_log: PathBuf,
}

impl Session {
    /// Open the ledger at `store`, or at the default data directory
    ///
    /// Saved budgets are restored and, when enabled in settings, mutations
    /// are recorded in the audit log.
    pub fn open(paths: FintrackPaths, store: Option<PathBuf>) -> LedgerResult<Self> {
        let settings = Settings::load_or_create(&paths)?;

        let store = match store {
            Some(path) => path,
            None => {
                paths.ensure_directories()?;
                paths.transactions_file()
            }
        };
        let budgets_file = budgets_file_for(&store);
        let audit_log = audit_log_for(&store);
        debug!(store = %store.display(), budgets = %budgets_file.display(), "opening ledger");

        let mut ledger = Ledger::load(store)?.with_budget_file(budgets_file)?;
        if settings.audit_enabled {
            ledger = ledger.with_audit_log(&audit_log);
        }

        Ok(Self {
            ledger,
            settings,
            paths,
            audit_log,
        })
    }

    /// The audit log for this ledger's store
    pub fn audit_log(&self) -> &Path {
        &self.audit_log
    }
}
