//! Transaction model
//!
//! Represents one recorded income or expense event together with the
//! storage row shape it is persisted as.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format used everywhere a transaction date is written or read
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names of the ledger store, in order
pub const STORE_COLUMNS: [&str; 7] = [
    "Date",
    "Mode",
    "Category",
    "Sub Category",
    "Income/Expense",
    "Amount",
    "Notes",
];

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The literal written to the `Income/Expense` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction kind '{}': expected Income or Expense",
                other
            ))),
        }
    }
}

/// One row of the ledger store
///
/// Field names and order are the storage format: the CSV header is derived
/// from this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Mode")]
    pub mode: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub Category")]
    pub sub_category: String,
    #[serde(rename = "Income/Expense")]
    pub kind: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    /// Absent in stores written before notes existed
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

/// Raw, user-entered transaction fields before coercion
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub date: String,
    pub mode: String,
    pub category: String,
    pub sub_category: String,
    pub kind: String,
    pub amount: String,
    pub notes: String,
}

impl TransactionInput {
    /// Create an input with empty notes
    pub fn new(
        date: impl Into<String>,
        mode: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        kind: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            mode: mode.into(),
            category: category.into(),
            sub_category: sub_category.into(),
            kind: kind.into(),
            amount: amount.into(),
            notes: String::new(),
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A financial transaction
///
/// Fields are private; a transaction never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    date: NaiveDate,
    mode: String,
    category: String,
    sub_category: String,
    kind: TransactionKind,
    amount: Money,
    #[serde(default)]
    notes: String,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative.
    pub fn new(
        date: NaiveDate,
        mode: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        kind: TransactionKind,
        amount: Money,
        notes: impl Into<String>,
    ) -> LedgerResult<Self> {
        if amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Amount must not be negative, got {}",
                amount
            )));
        }

        Ok(Self {
            date,
            mode: mode.into(),
            category: category.into(),
            sub_category: sub_category.into(),
            kind,
            amount,
            notes: notes.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if the date falls within the optional inclusive bounds
    pub fn is_within(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
        start.map_or(true, |s| self.date >= s) && end.map_or(true, |e| self.date <= e)
    }

    /// Convert to the storage row representation
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            date: self.date.format(DATE_FORMAT).to_string(),
            mode: self.mode.clone(),
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            kind: self.kind.to_string(),
            amount: self.amount.to_plain(),
            notes: self.notes.clone(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date, reporting the offending value on failure
pub fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            value
        ))
    })
}

fn parse_amount(value: &str) -> LedgerResult<Money> {
    Money::parse(value).map_err(|e| LedgerError::Validation(e.to_string()))
}

impl TryFrom<TransactionInput> for Transaction {
    type Error = LedgerError;

    fn try_from(input: TransactionInput) -> Result<Self, Self::Error> {
        Transaction::new(
            parse_date(&input.date)?,
            input.mode,
            input.category,
            input.sub_category,
            input.kind.parse()?,
            parse_amount(&input.amount)?,
            input.notes,
        )
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        Transaction::new(
            parse_date(&record.date)?,
            record.mode,
            record.category,
            record.sub_category,
            record.kind.parse()?,
            parse_amount(&record.amount)?,
            record.notes,
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} - {} | {}: {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.sub_category,
            self.kind,
            self.amount
        )
    }
}
