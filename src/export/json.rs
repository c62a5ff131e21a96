//! JSON Export functionality
//!
//! Exports a snapshot of the ledger (transactions, budgets and totals) with
//! schema versioning.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction};
use crate::services::Ledger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions in record order
    pub transactions: Vec<Transaction>,

    /// Budgets by category
    pub budgets: BTreeMap<String, Money>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,

    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
}

impl LedgerSnapshot {
    /// Capture the current state of a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let transactions = ledger.transactions().to_vec();

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date())
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.date())
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: ledger.budgets().len(),
            earliest_transaction,
            latest_transaction,
            total_income: ledger.total_income(None, None),
            total_expenses: ledger.total_expenses(None, None),
            balance: ledger.balance(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets: ledger.budgets().clone(),
            metadata,
        }
    }

    /// Validate the export structure
    ///
    /// Deserialization bypasses the transaction constructor, so amounts and
    /// budgets are checked again here.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.transaction_count != self.transactions.len() {
            return Err(format!(
                "Metadata lists {} transactions but the export contains {}",
                self.metadata.transaction_count,
                self.transactions.len()
            ));
        }

        if let Some((index, txn)) = self
            .transactions
            .iter()
            .enumerate()
            .find(|(_, t)| t.amount().is_negative())
        {
            return Err(format!(
                "Transaction {} has a negative amount ({})",
                index,
                txn.amount()
            ));
        }

        if let Some((category, amount)) = self.budgets.iter().find(|(_, a)| !a.is_positive()) {
            return Err(format!(
                "Budget for '{}' must be greater than zero, got {}",
                category, amount
            ));
        }

        Ok(())
    }
}

/// Export the ledger snapshot to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerSnapshot::from_ledger(ledger);
    export.validate().map_err(LedgerError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_demo_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::load(temp_dir.path().join("transactions.csv")).unwrap();
        (temp_dir, ledger)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, mut ledger) = create_demo_ledger();
        ledger.set_budget("Food", Money::from_cents(10000)).unwrap();

        let export = LedgerSnapshot::from_ledger(&ledger);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.transactions.len(), 20);
        assert_eq!(export.budgets.len(), 1);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-11-01"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2025-12-03"));
        assert_eq!(export.metadata.balance, ledger.balance());
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let (_temp_dir, ledger) = create_demo_ledger();

        let mut output = Vec::new();
        export_full_json(&ledger, &mut output, true).unwrap();

        let imported: LedgerSnapshot = serde_json::from_slice(&output).unwrap();
        assert_eq!(imported.transactions, ledger.transactions());
        assert!(imported.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_schema() {
        let (_temp_dir, ledger) = create_demo_ledger();
        let mut export = LedgerSnapshot::from_ledger(&ledger);
        export.schema_version = "0.1.0".into();

        assert!(export.validate().unwrap_err().contains("Schema version mismatch"));
    }

    #[test]
    fn test_validate_rejects_count_mismatch() {
        let (_temp_dir, ledger) = create_demo_ledger();
        let mut export = LedgerSnapshot::from_ledger(&ledger);
        export.transactions.pop();

        assert!(export.validate().is_err());
    }
}
