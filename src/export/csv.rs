//! CSV Export functionality
//!
//! Transactions are exported through `Ledger::export` in the store format.
//! Budgets get a small two-column sheet.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

/// Export budgets to CSV, one row per category
pub fn export_budgets_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

    csv.write_record(["Category", "Budget"]).map_err(export_err)?;
    for (category, amount) in ledger.budgets() {
        csv.write_record([category.as_str(), amount.to_plain().as_str()])
            .map_err(export_err)?;
    }

    csv.flush().map_err(|e| LedgerError::Export(e.to_string()))
}
