//! Transaction display formatting
//!
//! Renders transactions as a table with their ledger positions, which are the
//! indices `delete` takes.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Transaction, DATE_FORMAT};

use super::report::truncate;

const NOTES_WIDTH: usize = 30;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Sub Category")]
    sub_category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl TransactionRow {
    fn new(index: usize, txn: &Transaction) -> Self {
        Self {
            index,
            date: txn.date().format(DATE_FORMAT).to_string(),
            mode: txn.mode().to_string(),
            category: txn.category().to_string(),
            sub_category: txn.sub_category().to_string(),
            kind: txn.kind().to_string(),
            amount: txn.amount().to_string(),
            notes: truncate(txn.notes(), NOTES_WIDTH),
        }
    }
}

/// Pair each transaction of an order-preserving subset with its position in
/// the full sequence
pub fn with_positions<'a>(
    all: &'a [Transaction],
    subset: &[&'a Transaction],
) -> Vec<(usize, &'a Transaction)> {
    let mut positions = Vec::with_capacity(subset.len());
    let mut wanted = subset.iter().peekable();

    for (index, txn) in all.iter().enumerate() {
        match wanted.peek() {
            Some(next) if std::ptr::eq(**next, txn) => {
                positions.push((index, txn));
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    positions
}

/// Format indexed transactions as a table
pub fn format_transaction_table(transactions: &[(usize, &Transaction)]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|(index, txn)| TransactionRow::new(*index, txn));

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .with(Modify::new(Columns::single(6)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(index: usize, txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction #{}\n", index));
    output.push_str(&format!("Date:         {}\n", txn.date().format(DATE_FORMAT)));
    output.push_str(&format!("Type:         {}\n", txn.kind()));
    output.push_str(&format!("Amount:       {}\n", txn.amount()));
    output.push_str(&format!("Mode:         {}\n", txn.mode()));
    output.push_str(&format!("Category:     {}\n", txn.category()));
    output.push_str(&format!("Sub Category: {}\n", txn.sub_category()));

    if !txn.notes().is_empty() {
        output.push_str(&format!("Notes:        {}\n", txn.notes()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;

    fn sample() -> Vec<Transaction> {
        [
            ("2025-11-01", "Food", "Lunch", "Expense", "12"),
            ("2025-11-02", "Allowance", "From Parents", "Income", "800"),
            ("2025-11-03", "Food", "Dinner", "Expense", "20.5"),
        ]
        .into_iter()
        .map(|(date, category, sub, kind, amount)| {
            Transaction::try_from(TransactionInput::new(date, "Cash", category, sub, kind, amount))
                .unwrap()
        })
        .collect()
    }

    #[test]
    fn test_with_positions() {
        let all = sample();
        let food: Vec<&Transaction> = all.iter().filter(|t| t.category() == "Food").collect();

        let indexed = with_positions(&all, &food);
        let positions: Vec<usize> = indexed.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, [0, 2]);
    }

    #[test]
    fn test_format_transaction_table() {
        let all = sample();
        let indexed: Vec<(usize, &Transaction)> = all.iter().enumerate().collect();

        let output = format_transaction_table(&indexed);
        assert!(output.contains("Sub Category"));
        assert!(output.contains("From Parents"));
        assert!(output.contains("$800.00"));
        assert!(output.contains("$20.50"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_transaction_table(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_format_transaction_details() {
        let all = sample();
        let output = format_transaction_details(2, &all[2]);
        assert!(output.starts_with("Transaction #2\n"));
        assert!(output.contains("Sub Category: Dinner"));
        assert!(!output.contains("Notes:"));
    }
}
