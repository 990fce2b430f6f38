use crate::db::log::audit;
use crate::errors::AppResult;
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

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn create_attendance_device_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_device (
            serial_number  TEXT PRIMARY KEY,
            device_name    TEXT NOT NULL,
            ip_address     TEXT,
            status         TEXT,
            last_sync_time TEXT
        );
        "#,
    )
}

fn create_zk_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS zk_log (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            device_sn  TEXT NOT NULL,
            user_id    TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            punch_type TEXT CHECK(punch_type IN ('IN','OUT')),
            processed  INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_zk_log_processed ON zk_log(processed);
        "#,
    )
}

type Migration = fn(&Connection) -> Result<()>;

/// Ordered schema migrations, each recorded once in the `log` table.
const MIGRATIONS: &[(&str, Migration)] = &[
    ("20260101_0001_attendance_device", create_attendance_device_table),
    ("20260101_0002_zk_log", create_zk_log_table),
];

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, migrate) in MIGRATIONS {
        if migration_applied(conn, version)? {
            continue;
        }
        migrate(conn)?;
        audit(
            conn,
            "migration_applied",
            version,
            &format!("Applied schema migration {}", version),
        )?;
    }

    Ok(())
}
