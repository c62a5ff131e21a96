//! Budget status model
//!
//! A per-category spending ceiling evaluated against actual expenses.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Spending against a category budget, computed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// The configured ceiling
    pub budget: Money,
    /// Total expenses recorded in the category
    pub spent: Money,
    /// `budget - spent`; negative when overspent
    pub remaining: Money,
    /// `spent * 100 / budget`
    pub percentage: f64,
    /// Whether spending exceeds the budget
    pub over_budget: bool,
}

impl BudgetStatus {
    /// Evaluate spending against a budget
    pub fn evaluate(budget: Money, spent: Money) -> Self {
        let percentage = if budget.is_positive() {
            spent.cents() as f64 * 100.0 / budget.cents() as f64
        } else {
            0.0
        };

        Self {
            budget,
            spent,
            remaining: budget - spent,
            percentage,
            over_budget: spent > budget,
        }
    }
}
