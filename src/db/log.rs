//! Operations log: every supervisor correction is recorded so the audit
//! trail survives even though derived reports are never persisted.

use chrono::Local;
use rusqlite::{Connection, Result, params};

pub fn record_operation(
    conn: &Connection,
    operation: &str,
    target: &str,
    message: &str,
) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        params![Local::now().to_rfc3339(), operation, target, message],
    )?;
    Ok(())
}
