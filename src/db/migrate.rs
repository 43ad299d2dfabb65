use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `attendance` table exists.
fn attendance_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='attendance'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `attendance` table with the current schema.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            employee   TEXT NOT NULL,
            post       TEXT NOT NULL,
            action     TEXT NOT NULL CHECK(action IN ('in','out')),
            valid      INTEGER NOT NULL DEFAULT 1,
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        CREATE INDEX IF NOT EXISTS idx_attendance_post ON attendance(post, date);
        "#,
    )?;
    Ok(())
}

/// Check if the `attendance` table has a `valid` column (older databases
/// created before corrections were flaggable lack it).
fn attendance_has_valid_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('attendance')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "valid" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run all pending schema migrations. Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !attendance_table_exists(conn)? {
        create_attendance_table(conn)?;
        return Ok(());
    }

    if !attendance_has_valid_column(conn)? {
        conn.execute_batch(
            "ALTER TABLE attendance ADD COLUMN valid INTEGER NOT NULL DEFAULT 1;",
        )?;
    }

    Ok(())
}
