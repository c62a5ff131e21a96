//! Transaction store codec
//!
//! Reads and writes the ledger's CSV store. One row per transaction, header
//! `Date,Mode,Category,Sub Category,Income/Expense,Amount,Notes`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionRecord, STORE_COLUMNS};

use super::file_io::write_atomic;

/// Columns that may be absent from older stores
const OPTIONAL_COLUMNS: [&str; 1] = ["Notes"];

/// Read every transaction from a CSV source
///
/// Loading is all-or-nothing: the first malformed row fails the whole read
/// with a format error carrying that row's line number.
pub fn read_transactions<R: Read>(source: R) -> LedgerResult<Vec<Transaction>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let headers = reader.headers()?.clone();
    check_headers(&headers)?;

    let mut transactions = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: TransactionRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| LedgerError::format(line, e.to_string()))?;

        let txn = Transaction::try_from(row).map_err(|e| match e {
            LedgerError::Validation(message) => LedgerError::format(line, message),
            other => other,
        })?;
        transactions.push(txn);
    }

    Ok(transactions)
}

fn check_headers(headers: &StringRecord) -> LedgerResult<()> {
    if headers.is_empty() {
        return Err(LedgerError::format(1, "missing header row"));
    }

    for column in STORE_COLUMNS {
        if OPTIONAL_COLUMNS.contains(&column) {
            continue;
        }
        if !headers.iter().any(|h| h == column) {
            return Err(LedgerError::format(
                1,
                format!("missing required column '{}'", column),
            ));
        }
    }

    for header in headers.iter() {
        if !STORE_COLUMNS.contains(&header) {
            warn!(column = header, "ignoring unknown column in ledger store");
        }
    }

    Ok(())
}

/// Write transactions as CSV, header first, in sequence order
pub fn write_transactions<W: Write>(sink: W, transactions: &[Transaction]) -> LedgerResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(STORE_COLUMNS)?;
    for txn in transactions {
        writer.serialize(txn.to_record())?;
    }

    writer.flush()?;
    Ok(())
}

/// Load the store at `path`
pub fn load_transactions<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let transactions = read_transactions(file)?;
    debug!(path = %path.display(), count = transactions.len(), "loaded ledger store");
    Ok(transactions)
}

/// Replace the store at `path` atomically
pub fn save_transactions<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> LedgerResult<()> {
    let path = path.as_ref();
    write_atomic(path, |writer| write_transactions(writer, transactions))?;
    debug!(path = %path.display(), count = transactions.len(), "saved ledger store");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionInput, TransactionKind};
    use tempfile::TempDir;

    const HEADER: &str = "Date,Mode,Category,Sub Category,Income/Expense,Amount,Notes\n";

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::try_from(
                TransactionInput::new("2025-11-18", "Cash", "Food", "Dinner", "Expense", "20")
                    .with_notes("Italian, with \"friends\""),
            )
            .unwrap(),
            Transaction::try_from(TransactionInput::new(
                "2025-11-18",
                "Bank Transfer",
                "Allowance",
                "From Dad",
                "Income",
                "300",
            ))
            .unwrap(),
        ]
    }

    #[test]
    fn test_write_format() {
        let mut out = Vec::new();
        write_transactions(&mut out, &sample()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(HEADER));
        assert!(text.contains("2025-11-18,Cash,Food,Dinner,Expense,20.00,\"Italian, with \"\"friends\"\"\""));
        assert!(text.contains("2025-11-18,Bank Transfer,Allowance,From Dad,Income,300.00,\n"));
    }

    #[test]
    fn test_empty_sequence_still_writes_header() {
        let mut out = Vec::new();
        write_transactions(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), HEADER);
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");

        save_transactions(&path, &sample()).unwrap();
        let loaded = load_transactions(&path).unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_missing_notes_column_defaults_to_empty() {
        let data = "Date,Mode,Category,Sub Category,Income/Expense,Amount\n\
                    2025-11-01,Bank Transfer,Allowance,From Parents,Income,800.0\n";

        let loaded = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].notes(), "");
        assert_eq!(loaded[0].amount(), Money::from_cents(80000));
        assert_eq!(loaded[0].kind(), TransactionKind::Income);
    }

    #[test]
    fn test_columns_located_by_name() {
        let data = "Amount,Date,Income/Expense,Category,Sub Category,Mode,Extra\n\
                    8.5,2025-11-02,Expense,Food,Breakfast,Cash,ignored\n";

        let loaded = read_transactions(data.as_bytes()).unwrap();
        assert_eq!(loaded[0].category(), "Food");
        assert_eq!(loaded[0].mode(), "Cash");
        assert_eq!(loaded[0].amount(), Money::from_cents(850));
    }

    #[test]
    fn test_bad_amount_fails_with_line() {
        let data = format!(
            "{}2025-11-02,Cash,Food,Breakfast,Expense,8.5,\n2025-11-03,Cash,Food,Lunch,Expense,lots,\n",
            HEADER
        );

        let err = read_transactions(data.as_bytes()).unwrap_err();
        match err {
            LedgerError::Format { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("lots"));
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_and_kind_fail() {
        let bad_date = format!("{}2025-13-01,Cash,Food,Lunch,Expense,1,\n", HEADER);
        assert!(read_transactions(bad_date.as_bytes()).unwrap_err().is_format());

        let bad_kind = format!("{}2025-11-01,Cash,Food,Lunch,Refund,1,\n", HEADER);
        assert!(read_transactions(bad_kind.as_bytes()).unwrap_err().is_format());
    }

    #[test]
    fn test_missing_required_column() {
        let data = "Date,Mode,Category,Income/Expense,Amount\n2025-11-01,Cash,Food,Expense,1\n";
        let err = read_transactions(data.as_bytes()).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("Sub Category"));
    }

    #[test]
    fn test_empty_file_is_format_error() {
        assert!(read_transactions("".as_bytes()).unwrap_err().is_format());
    }

    #[test]
    fn test_ragged_row_is_format_error() {
        let data = format!("{}2025-11-01,Cash,Food\n", HEADER);
        assert!(read_transactions(data.as_bytes()).unwrap_err().is_format());
    }
}
