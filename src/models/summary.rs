//! Derived aggregate views over the ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl MonthlySummary {
    /// Build a summary from its two sums
    pub fn new(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Total spending on a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: Money,
}
