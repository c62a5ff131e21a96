//! First-run demonstration data
//!
//! A ledger opened on a path with no store is seeded with this fixed dataset
//! and persisted immediately, so a fresh install has something to look at.

use crate::error::LedgerResult;
use crate::models::{parse_date, Money, Transaction, TransactionKind};

/// (date, mode, category, sub category, kind, cents, notes)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    TransactionKind,
    i64,
    &'static str,
);

const SEED_ROWS: [SeedRow; 20] = {
    use TransactionKind::{Expense, Income};
    [
        // November
        ("2025-11-01", "Bank Transfer", "Allowance", "From Parents", Income, 80000, "Monthly allowance"),
        ("2025-11-02", "Cash", "Food", "Breakfast", Expense, 850, "Campus cafe"),
        ("2025-11-02", "Card", "Transportation", "Bus fare", Expense, 300, "To university"),
        ("2025-11-03", "Cash", "Food", "Lunch", Expense, 1200, "Lunch with friends"),
        ("2025-11-04", "Online", "Entertainment", "Movie ticket", Expense, 1500, "Weekend movie"),
        ("2025-11-05", "Cash", "Food", "Dinner", Expense, 1850, "Dinner out"),
        ("2025-11-06", "Card", "Household", "Groceries", Expense, 4500, "Weekly groceries"),
        ("2025-11-07", "Cash", "Food", "Snacks", Expense, 650, "Study snacks"),
        ("2025-11-08", "Bank Transfer", "Allowance", "Part-time job", Income, 15000, "Weekly paycheck"),
        ("2025-11-09", "Card", "Transportation", "Metro", Expense, 450, "Monthly pass"),
        ("2025-11-10", "Cash", "Food", "Lunch", Expense, 1300, "Campus food court"),
        ("2025-11-11", "Online", "Other", "Online subscription", Expense, 999, "Netflix"),
        ("2025-11-12", "Cash", "Food", "Coffee", Expense, 550, "Study coffee"),
        ("2025-11-13", "Card", "Entertainment", "Concert", Expense, 3500, "Live music"),
        ("2025-11-14", "Cash", "Food", "Dinner", Expense, 2200, "Restaurant"),
        ("2025-11-15", "Card", "Household", "Cleaning supplies", Expense, 1800, "Apartment cleaning"),
        // December
        ("2025-12-01", "Bank Transfer", "Allowance", "From Parents", Income, 80000, "Monthly allowance"),
        ("2025-12-02", "Cash", "Food", "Breakfast", Expense, 900, "Morning coffee"),
        ("2025-12-02", "Card", "Transportation", "Bus fare", Expense, 300, "Daily commute"),
        ("2025-12-03", "Cash", "Food", "Lunch", Expense, 1400, "Quick lunch"),
    ]
};

/// Build the demonstration transactions in record order
pub fn demo_transactions() -> LedgerResult<Vec<Transaction>> {
    SEED_ROWS
        .iter()
        .map(|&(date, mode, category, sub_category, kind, cents, notes)| {
            Transaction::new(
                parse_date(date)?,
                mode,
                category,
                sub_category,
                kind,
                Money::from_cents(cents),
                notes,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_shape() {
        let txns = demo_transactions().unwrap();
        assert_eq!(txns.len(), 20);
        assert_eq!(txns.iter().filter(|t| t.is_income()).count(), 3);

        assert_eq!(txns.first().unwrap().to_record().date, "2025-11-01");
        assert_eq!(txns.last().unwrap().to_record().date, "2025-12-03");
    }

    #[test]
    fn test_demo_dataset_categories() {
        let txns = demo_transactions().unwrap();
        for category in [
            "Food",
            "Transportation",
            "Entertainment",
            "Household",
            "Other",
            "Allowance",
        ] {
            assert!(
                txns.iter().any(|t| t.category() == category),
                "missing {category}"
            );
        }
    }
}
