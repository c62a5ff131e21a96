//! Audit logging for ledger mutations
//!
//! Every transaction added or deleted and every budget set is appended to an
//! audit log as one JSON object per line (JSONL), with before/after values.
//!
//! - `AuditEntry`: a single record with timestamp, operation and entity.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(EntityType::Transaction, "20", None, &txn);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
