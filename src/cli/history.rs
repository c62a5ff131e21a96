//! Audit history command

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

use super::Session;

/// Print the last `count` audit log entries, oldest first
pub fn handle_history_command(session: &Session, count: usize) -> LedgerResult<()> {
    let logger = AuditLogger::new(session.audit_log().to_path_buf());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        if !session.settings.audit_enabled {
            println!("Audit logging is disabled in {}.", session.paths.settings_file().display());
        } else {
            println!("No history recorded yet.");
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
