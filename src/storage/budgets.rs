//! Budget sidecar file
//!
//! The ledger keeps budgets in memory only. The command-line front end
//! persists them between runs in `budgets.json` next to the store.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LedgerResult;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Category name -> budget ceiling
pub type BudgetMap = BTreeMap<String, Money>;

/// Load budgets, returning an empty map when the file doesn't exist
pub fn load_budgets<P: AsRef<Path>>(path: P) -> LedgerResult<BudgetMap> {
    read_json(path)
}

/// Save budgets atomically
pub fn save_budgets<P: AsRef<Path>>(path: P, budgets: &BudgetMap) -> LedgerResult<()> {
    write_json_atomic(path, budgets)
}
