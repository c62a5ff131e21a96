//! Queries and aggregations over the ledger
//!
//! Everything here is a pure read of the in-memory sequence. Grouping uses
//! `BTreeMap` accumulators so results come back in key order.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthlySummary, Transaction, TransactionKind, TrendPoint};

use super::ledger::Ledger;

const MONTH_KEY_FORMAT: &str = "%Y-%m";

impl Ledger {
    /// Sum of income within the optional inclusive date bounds
    pub fn total_income(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Money {
        self.sum_kind(TransactionKind::Income, start, end)
    }

    /// Sum of expenses within the optional inclusive date bounds
    pub fn total_expenses(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Money {
        self.sum_kind(TransactionKind::Expense, start, end)
    }

    /// All-time income minus all-time expenses
    pub fn balance(&self) -> Money {
        self.total_income(None, None) - self.total_expenses(None, None)
    }

    fn sum_kind(
        &self,
        kind: TransactionKind,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Money {
        self.transactions()
            .iter()
            .filter(|t| t.kind() == kind && t.is_within(start, end))
            .map(|t| t.amount())
            .sum()
    }

    /// Expense totals per category
    ///
    /// Categories with no expenses in range are absent rather than zero.
    pub fn expense_by_category(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> BTreeMap<String, Money> {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for txn in self
            .transactions()
            .iter()
            .filter(|t| t.is_expense() && t.is_within(start, end))
        {
            *totals.entry(txn.category().to_string()).or_default() += txn.amount();
        }
        totals
    }

    /// Income, expense and balance per calendar month, keyed `YYYY-MM`
    pub fn monthly_summary(&self) -> BTreeMap<String, MonthlySummary> {
        let mut sums: BTreeMap<String, (Money, Money)> = BTreeMap::new();
        for txn in self.transactions() {
            let key = txn.date().format(MONTH_KEY_FORMAT).to_string();
            let (income, expense) = sums.entry(key).or_default();
            match txn.kind() {
                TransactionKind::Income => *income += txn.amount(),
                TransactionKind::Expense => *expense += txn.amount(),
            }
        }

        sums.into_iter()
            .map(|(month, (income, expense))| (month, MonthlySummary::new(income, expense)))
            .collect()
    }

    /// The last `n` transactions in record order
    pub fn recent(&self, n: usize) -> &[Transaction] {
        let all = self.transactions();
        &all[all.len().saturating_sub(n)..]
    }

    /// Transactions dated within the optional inclusive bounds
    pub fn filter_by_date_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<&Transaction> {
        self.filter(|t| t.is_within(start, end))
    }

    /// Transactions in exactly this category
    pub fn filter_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.filter(|t| t.category() == category)
    }

    /// Transactions of one kind
    pub fn filter_by_type(&self, kind: TransactionKind) -> Vec<&Transaction> {
        self.filter(|t| t.kind() == kind)
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        self.transactions().iter().filter(|t| predicate(t)).collect()
    }

    /// Case-insensitive substring search over sub-category and notes
    ///
    /// A transaction matches if either field contains the keyword.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or whitespace-only keyword.
    pub fn search(&self, keyword: &str) -> LedgerResult<Vec<&Transaction>> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Err(LedgerError::Validation(
                "Search keyword must not be empty".into(),
            ));
        }

        Ok(self.filter(|t| {
            t.sub_category().to_lowercase().contains(&needle)
                || t.notes().to_lowercase().contains(&needle)
        }))
    }

    /// Daily expense totals over the last `days` days, measured from the
    /// ledger's clock
    pub fn spending_trend(&self, category: Option<&str>, days: u32) -> Vec<TrendPoint> {
        self.spending_trend_at(self.today(), category, days)
    }

    /// Daily expense totals dated within `[today - days, today]`
    ///
    /// Optionally restricted to one category. Points are ascending by date;
    /// days with no spending are omitted.
    pub fn spending_trend_at(
        &self,
        today: NaiveDate,
        category: Option<&str>,
        days: u32,
    ) -> Vec<TrendPoint> {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);

        let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for txn in self.transactions().iter().filter(|t| {
            t.is_expense()
                && t.is_within(Some(start), Some(today))
                && category.map_or(true, |c| t.category() == c)
        }) {
            *by_day.entry(txn.date()).or_default() += txn.amount();
        }

        by_day
            .into_iter()
            .map(|(date, amount)| TrendPoint { date, amount })
            .collect()
    }
}
