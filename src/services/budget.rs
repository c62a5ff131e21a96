//! Budget tracking
//!
//! Budgets are per-category spending ceilings held alongside the ledger.
//! They are not stored in the transaction file but, when a budget file is
//! attached, in a JSON sidecar. Status is computed from the ledger's
//! expenses each time it is asked for.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetStatus, Money};
use crate::storage::{load_budgets, save_budgets};

use super::ledger::Ledger;

/// Category name -> budget ceiling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetTracker {
    budgets: BTreeMap<String, Money>,
}

impl BudgetTracker {
    /// Set or replace the budget for a category
    ///
    /// Returns the previous budget, if any.
    pub fn set(&mut self, category: impl Into<String>, amount: Money) -> LedgerResult<Option<Money>> {
        let category = category.into();
        validate_budget(&category, amount)?;
        Ok(self.budgets.insert(category, amount))
    }

    /// Remove a category's budget, returning it
    pub fn remove(&mut self, category: &str) -> Option<Money> {
        self.budgets.remove(category)
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.budgets.get(category).copied()
    }

    /// All budgets ordered by category
    pub fn as_map(&self) -> &BTreeMap<String, Money> {
        &self.budgets
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    /// Evaluate one category against the given per-category expense totals
    pub fn status(&self, category: &str, spent: &BTreeMap<String, Money>) -> Option<BudgetStatus> {
        let budget = self.get(category)?;
        let spent = spent.get(category).copied().unwrap_or_default();
        Some(BudgetStatus::evaluate(budget, spent))
    }
}

fn validate_budget(category: &str, amount: Money) -> LedgerResult<()> {
    if category.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Budget category must not be empty".into(),
        ));
    }
    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Budget for '{}' must be greater than zero, got {}",
            category, amount
        )));
    }
    Ok(())
}

impl Ledger {
    /// Restore previously saved budgets
    ///
    /// Restoring is not a mutation of the ledger's history, so nothing is
    /// written to the audit log.
    pub fn with_budgets(mut self, budgets: BTreeMap<String, Money>) -> LedgerResult<Self> {
        for (category, amount) in budgets {
            self.budgets.set(category, amount)?;
        }
        Ok(self)
    }

    /// Load budgets from `path` and save every later change back to it
    ///
    /// A missing file means no budgets yet.
    pub fn with_budget_file(self, path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let mut ledger = self.with_budgets(load_budgets(&path)?)?;
        ledger.budgets_file = Some(path);
        Ok(ledger)
    }

    /// Set or overwrite the budget for a category
    ///
    /// With a budget file attached the change is saved immediately; if that
    /// save fails the previous budget is restored and nothing is audited.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `amount > 0`.
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) -> LedgerResult<()> {
        let category = category.into();
        let before = self.budgets.set(category.clone(), amount)?;

        if let Some(path) = &self.budgets_file {
            if let Err(e) = save_budgets(path, self.budgets.as_map()) {
                match before {
                    Some(previous) => {
                        self.budgets.set(category, previous)?;
                    }
                    None => {
                        self.budgets.remove(&category);
                    }
                }
                return Err(e);
            }
        }

        self.audit(|| match before {
            Some(before) => AuditEntry::update(
                EntityType::Budget,
                category.clone(),
                Some(category.clone()),
                &before,
                &amount,
            ),
            None => AuditEntry::create(
                EntityType::Budget,
                category.clone(),
                Some(category.clone()),
                &amount,
            ),
        })?;

        debug!(category = %category, amount = %amount, "set budget");
        Ok(())
    }

    /// The budget for a category, if one has been set
    pub fn get_budget(&self, category: &str) -> Option<Money> {
        self.budgets.get(category)
    }

    /// All budgets ordered by category
    pub fn budgets(&self) -> &BTreeMap<String, Money> {
        self.budgets.as_map()
    }

    /// Compare a category's all-time expenses with its budget
    ///
    /// Returns `None` when no budget is set for the category.
    pub fn check_status(&self, category: &str) -> Option<BudgetStatus> {
        let budget = self.budgets.get(category)?;
        let spent = self.category_expenses(category);
        Some(BudgetStatus::evaluate(budget, spent))
    }

    /// Status of every budgeted category, ordered by category
    pub fn budget_statuses(&self) -> Vec<(String, BudgetStatus)> {
        if self.budgets.is_empty() {
            return Vec::new();
        }

        let spent = self.expense_by_category(None, None);
        self.budgets
            .as_map()
            .keys()
            .filter_map(|category| {
                self.budgets
                    .status(category, &spent)
                    .map(|status| (category.clone(), status))
            })
            .collect()
    }

    fn category_expenses(&self, category: &str) -> Money {
        self.transactions()
            .iter()
            .filter(|t| t.is_expense() && t.category() == category)
            .map(|t| t.amount())
            .sum()
    }
}
