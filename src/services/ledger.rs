//! The ledger: owner of the transaction sequence
//!
//! A [`Ledger`] is opened on a CSV store path, holds every transaction in
//! record order, and is the only way to mutate them. Queries live in
//! `analytics.rs` and budgets in `budget.rs`; both are further `impl Ledger`
//! blocks over the same state.
//!
//! # Persistence
//!
//! `add` only appends in memory; call [`Ledger::save`] to persist. `delete`
//! saves on its own, and so does `set_budget` once a budget file is
//! attached. A process that exits between `add` and `save` loses the unsaved
//! transactions.
//!
//! # Sharing a store
//!
//! There is no file locking. Two ledgers opened on the same path each hold
//! their own copy of the sequence, and whichever saves last overwrites the
//! other's changes. Open one ledger per store.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionInput};
use crate::storage::{demo_transactions, load_transactions, save_transactions};

use super::budget::BudgetTracker;

/// Personal finance ledger backed by a CSV store
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
    pub(super) budgets: BudgetTracker,
    pub(super) budgets_file: Option<PathBuf>,
    clock: Box<dyn Clock>,
    audit: Option<AuditLogger>,
}

impl Ledger {
    /// Open the ledger stored at `path`
    ///
    /// If no file exists there, the ledger is seeded with the demonstration
    /// dataset and written out immediately.
    ///
    /// # Errors
    ///
    /// Returns a format error if any row of an existing store is malformed;
    /// nothing is loaded in that case.
    pub fn load(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();

        let exists = path.try_exists().map_err(|e| {
            LedgerError::Io(format!("Failed to access {}: {}", path.display(), e))
        })?;

        let transactions = if exists {
            load_transactions(&path)?
        } else {
            let seed = demo_transactions()?;
            save_transactions(&path, &seed)?;
            info!(
                path = %path.display(),
                count = seed.len(),
                "no ledger store found, created one with demonstration data"
            );
            seed
        };

        Ok(Self {
            path,
            transactions,
            budgets: BudgetTracker::default(),
            budgets_file: None,
            clock: Box::new(SystemClock),
            audit: None,
        })
    }

    /// Use `clock` as the source of "today" for time-relative queries
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Record every mutation in the audit log at `path`
    pub fn with_audit_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.audit = Some(AuditLogger::new(path.into()));
        self
    }

    /// The store this ledger saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All transactions in record order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The transaction at a zero-based position
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub(super) fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Write the full sequence to the store, replacing it atomically
    pub fn save(&self) -> LedgerResult<()> {
        save_transactions(&self.path, &self.transactions)
    }

    /// Write the full sequence to another file in the store format
    pub fn export<P: AsRef<Path>>(&self, dest: P) -> LedgerResult<()> {
        let dest = dest.as_ref();
        save_transactions(dest, &self.transactions)?;
        info!(path = %dest.display(), count = self.len(), "exported transactions");
        Ok(())
    }

    /// Validate and append a transaction built from raw input
    ///
    /// Does not save.
    pub fn add(&mut self, input: TransactionInput) -> LedgerResult<&Transaction> {
        let txn = Transaction::try_from(input)?;
        self.push(txn)
    }

    /// Append an already-built transaction
    ///
    /// Does not save.
    pub fn push(&mut self, txn: Transaction) -> LedgerResult<&Transaction> {
        let index = self.transactions.len();
        self.audit(|| {
            AuditEntry::create(
                EntityType::Transaction,
                index.to_string(),
                Some(describe(&txn)),
                &txn,
            )
        })?;

        debug!(index, transaction = %txn, "added transaction");
        self.transactions.push(txn);
        Ok(&self.transactions[index])
    }

    /// Remove the transaction at `index` and save
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` when `index >= len()`; the ledger and store
    /// are left untouched. If the save fails the transaction is put back, no
    /// audit entry is written and the I/O error is returned.
    pub fn delete(&mut self, index: usize) -> LedgerResult<Transaction> {
        let len = self.transactions.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }

        let removed = self.transactions.remove(index);
        if let Err(e) = self.save() {
            self.transactions.insert(index, removed);
            return Err(e);
        }

        self.audit(|| {
            AuditEntry::delete(
                EntityType::Transaction,
                index.to_string(),
                Some(describe(&removed)),
                &removed,
            )
        })?;

        debug!(index, transaction = %removed, "deleted transaction");
        Ok(removed)
    }

    /// Write an audit entry if an audit log is configured
    pub(super) fn audit<F>(&self, entry: F) -> LedgerResult<()>
    where
        F: FnOnce() -> AuditEntry,
    {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

fn describe(txn: &Transaction) -> String {
    format!("{} - {}", txn.category(), txn.sub_category())
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("path", &self.path)
            .field("transactions", &self.transactions.len())
            .field("budgets", &self.budgets)
            .field("audit", &self.audit.as_ref().map(AuditLogger::path))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Money, TransactionKind};
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "Date,Mode,Category,Sub Category,Income/Expense,Amount,Notes\n";

    fn create_empty_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(&path, HEADER).unwrap();
        let ledger = Ledger::load(&path).unwrap();
        (temp_dir, ledger)
    }

    fn expense(date: &str, category: &str, sub: &str, amount: &str) -> TransactionInput {
        TransactionInput::new(date, "Cash", category, sub, "Expense", amount)
    }

    #[test]
    fn test_missing_store_is_seeded_and_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("transactions.csv");

        let ledger = Ledger::load(&path).unwrap();
        assert_eq!(ledger.len(), 20);
        assert!(path.exists());

        let reopened = Ledger::load(&path).unwrap();
        assert_eq!(reopened.transactions(), ledger.transactions());
    }

    #[test]
    fn test_header_only_store_is_empty() {
        let (_temp_dir, ledger) = create_empty_ledger();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_appends_without_saving() {
        let (_temp_dir, mut ledger) = create_empty_ledger();

        let txn = ledger
            .add(expense("2025-11-18", "Transportation", "Bus fare", "3.00").with_notes("Daily commute"))
            .unwrap();
        assert_eq!(txn.amount(), Money::from_cents(300));
        assert_eq!(ledger.len(), 1);

        let on_disk = Ledger::load(ledger.path()).unwrap();
        assert!(on_disk.is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, mut ledger) = create_empty_ledger();

        assert!(ledger.add(expense("2025-11-18", "Food", "Lunch", "-1")).unwrap_err().is_validation());
        assert!(ledger.add(expense("18/11/2025", "Food", "Lunch", "1")).unwrap_err().is_validation());
        assert!(ledger
            .add(TransactionInput::new("2025-11-18", "Cash", "Food", "Lunch", "Gift", "1"))
            .unwrap_err()
            .is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, mut ledger) = create_empty_ledger();
        ledger
            .add(expense("2025-11-18", "Food", "Dinner", "20").with_notes("Italian restaurant"))
            .unwrap();
        ledger
            .add(
                TransactionInput::new("2025-11-18", "Bank Transfer", "Allowance", "From Dad", "Income", "300")
                    .with_notes("Weekly allowance"),
            )
            .unwrap();
        ledger.save().unwrap();

        let reopened = Ledger::load(ledger.path()).unwrap();
        assert_eq!(reopened.transactions(), ledger.transactions());
        assert_eq!(reopened.get(1).unwrap().kind(), TransactionKind::Income);
    }

    #[test]
    fn test_save_is_byte_stable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        let ledger = Ledger::load(&path).unwrap();
        let first = fs::read(&path).unwrap();

        Ledger::load(&path).unwrap().save().unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
        drop(ledger);
    }

    #[test]
    fn test_delete_removes_and_saves() {
        let (_temp_dir, mut ledger) = create_empty_ledger();
        ledger.add(expense("2025-11-01", "Food", "Lunch", "10")).unwrap();
        ledger.add(expense("2025-11-02", "Food", "Dinner", "20")).unwrap();
        ledger.add(expense("2025-11-03", "Food", "Snacks", "5")).unwrap();

        let removed = ledger.delete(1).unwrap();
        assert_eq!(removed.sub_category(), "Dinner");
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().sub_category(), "Snacks");

        let on_disk = Ledger::load(ledger.path()).unwrap();
        assert_eq!(on_disk.transactions(), ledger.transactions());
    }

    #[test]
    fn test_delete_out_of_range_leaves_everything_untouched() {
        let (_temp_dir, mut ledger) = create_empty_ledger();
        ledger.add(expense("2025-11-01", "Food", "Lunch", "10")).unwrap();
        ledger.save().unwrap();
        let before = fs::read(ledger.path()).unwrap();

        let err = ledger.delete(1).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(ledger.len(), 1);
        assert_eq!(fs::read(ledger.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_restores_transaction_when_save_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(&path, HEADER).unwrap();
        let mut ledger = Ledger::load(&path).unwrap();
        ledger.add(expense("2025-11-01", "Food", "Lunch", "10")).unwrap();

        // A directory where the temp file should go makes the save fail
        fs::create_dir(temp_dir.path().join("transactions.csv.tmp")).unwrap();

        assert!(ledger.delete(0).is_err());
        assert_eq!(ledger.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), HEADER);
    }

    #[test]
    fn test_failed_delete_is_not_audited() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(&path, HEADER).unwrap();
        let audit_path = temp_dir.path().join("audit.log");
        let mut ledger = Ledger::load(&path).unwrap().with_audit_log(&audit_path);
        ledger.add(expense("2025-11-01", "Food", "Lunch", "10")).unwrap();

        fs::create_dir(temp_dir.path().join("transactions.csv.tmp")).unwrap();
        assert!(ledger.delete(0).is_err());

        let ops: Vec<Operation> = AuditLogger::new(audit_path)
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, [Operation::Create]);
    }

    #[test]
    fn test_add_rounds_extra_precision_to_cents() {
        let (_temp_dir, mut ledger) = create_empty_ledger();

        let txn = ledger.add(expense("2025-11-18", "Food", "Pizza", "12.345")).unwrap();
        assert_eq!(txn.amount(), Money::from_cents(1235));
    }

    #[test]
    fn test_load_accepts_amounts_with_extra_precision() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(
            &path,
            format!("{HEADER}2025-11-01,Card,Entertainment,Streaming,Expense,9.999,Netflix\n"),
        )
        .unwrap();

        let ledger = Ledger::load(&path).unwrap();
        assert_eq!(ledger.get(0).unwrap().amount(), Money::from_cents(1000));
        assert_eq!(ledger.get(0).unwrap().notes(), "Netflix");
    }

    #[test]
    fn test_malformed_store_fails_whole_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        fs::write(
            &path,
            format!("{HEADER}2025-11-01,Cash,Food,Lunch,Expense,12,\n2025-11-02,Cash,Food,Lunch,Expense,abc,\n"),
        )
        .unwrap();

        let err = Ledger::load(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Format { line: 3, .. }));
    }

    #[test]
    fn test_export_writes_store_format() {
        let (temp_dir, mut ledger) = create_empty_ledger();
        ledger.add(expense("2025-11-01", "Food", "Lunch", "12.5")).unwrap();

        let dest = temp_dir.path().join("export.csv");
        ledger.export(&dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            format!("{HEADER}2025-11-01,Cash,Food,Lunch,Expense,12.50,\n")
        );
    }

    #[test]
    fn test_second_instance_save_loses_first_instances_update() {
        let (_temp_dir, mut first) = create_empty_ledger();
        let mut second = Ledger::load(first.path()).unwrap();

        first.add(expense("2025-11-01", "Food", "Lunch", "10")).unwrap();
        first.save().unwrap();
        second.add(expense("2025-11-02", "Food", "Dinner", "20")).unwrap();
        second.save().unwrap();

        let on_disk = Ledger::load(first.path()).unwrap();
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk.get(0).unwrap().sub_category(), "Dinner");
    }

    #[test]
    fn test_mutations_are_audited() {
        let (temp_dir, ledger) = create_empty_ledger();
        let audit_path = temp_dir.path().join("audit.log");
        let mut ledger = ledger.with_audit_log(&audit_path);

        ledger.add(expense("2025-11-01", "Food", "Lunch", "10")).unwrap();
        ledger.delete(0).unwrap();

        let entries = AuditLogger::new(audit_path).read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Food - Lunch"));
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[1].entity_id, "0");
    }
}
