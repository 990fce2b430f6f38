use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceDeviceRecord, DocType, Document, PunchType, ZkLogRecord};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde_json::Value;

/// Insert or update a device, keyed by serial number.
pub fn upsert_device(conn: &Connection, device: &AttendanceDeviceRecord) -> AppResult<()> {
    let mut device = device.clone();
    device.before_save();

    conn.execute(
        "INSERT INTO attendance_device (serial_number, device_name, ip_address, status, last_sync_time)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(serial_number) DO UPDATE SET
            device_name    = excluded.device_name,
            ip_address     = COALESCE(excluded.ip_address, attendance_device.ip_address),
            status         = excluded.status,
            last_sync_time = COALESCE(excluded.last_sync_time, attendance_device.last_sync_time)",
        params![
            device.serial_number,
            device.device_name,
            device.ip_address,
            device.status,
            device.last_sync_time.as_ref().map(format_timestamp),
        ],
    )?;
    Ok(())
}

fn map_device(row: &Row) -> rusqlite::Result<AttendanceDeviceRecord> {
    let last_sync: Option<String> = row.get("last_sync_time")?;
    Ok(AttendanceDeviceRecord {
        serial_number: row.get("serial_number")?,
        device_name: row.get("device_name")?,
        ip_address: row.get("ip_address")?,
        status: row.get("status")?,
        last_sync_time: last_sync.and_then(|s| parse_timestamp(&s).ok()),
    })
}

pub fn load_device(conn: &Connection, serial_number: &str) -> AppResult<Option<AttendanceDeviceRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT serial_number, device_name, ip_address, status, last_sync_time
         FROM attendance_device WHERE serial_number = ?1",
    )?;
    Ok(stmt.query_row([serial_number], map_device).optional()?)
}

/// Store the raw status string; `last_sync_time` is only touched when given.
pub fn set_device_status(
    conn: &Connection,
    serial_number: &str,
    status: &str,
    last_sync_time: Option<NaiveDateTime>,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE attendance_device
         SET status = ?2,
             last_sync_time = COALESCE(?3, last_sync_time)
         WHERE serial_number = ?1",
        params![
            serial_number,
            status,
            last_sync_time.as_ref().map(format_timestamp)
        ],
    )?;

    if changed == 0 {
        return Err(AppError::DeviceNotFound(serial_number.to_string()));
    }
    Ok(())
}

/// Insert a punch and return its id.
pub fn insert_zk_log(conn: &Connection, log: &ZkLogRecord) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO zk_log (device_sn, user_id, timestamp, punch_type, processed)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    stmt.execute(params![
        log.device_sn,
        log.user_id,
        log.timestamp.as_ref().map(format_timestamp).unwrap_or_default(),
        log.punch_type.map(|p| p.to_db_str()),
        log.processed as i64,
    ])?;

    Ok(conn.last_insert_rowid())
}

pub fn load_zk_log(conn: &Connection, id: i64) -> AppResult<Option<ZkLogRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, device_sn, user_id, timestamp, punch_type, processed
         FROM zk_log WHERE id = ?1",
    )?;

    let rec = stmt
        .query_row([id], |row| {
            let ts: String = row.get("timestamp")?;
            let punch: Option<String> = row.get("punch_type")?;
            let processed: i64 = row.get("processed")?;
            Ok(ZkLogRecord {
                id: row.get("id")?,
                device_sn: row.get("device_sn")?,
                user_id: row.get("user_id")?,
                timestamp: parse_timestamp(&ts).ok(),
                punch_type: punch.as_deref().and_then(PunchType::from_db_str),
                processed: processed != 0,
            })
        })
        .optional()?;

    Ok(rec)
}

pub fn set_processed(conn: &Connection, id: i64, processed: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE zk_log SET processed = ?2 WHERE id = ?1",
        params![id, processed as i64],
    )?;

    if changed == 0 {
        return Err(AppError::LogNotFound(id));
    }
    Ok(())
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Value::from(f),
        ValueRef::Text(t) => Value::from(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(_) => Value::Null,
    }
}

/// Fetch every row of `doctype` as a generic document holding the row
/// name plus `fields`. Field names come from the list-view settings.
pub fn load_documents(
    conn: &Connection,
    doctype: DocType,
    fields: &[&str],
) -> AppResult<Vec<Document>> {
    let name_col = doctype.name_column();
    let mut columns = vec![name_col];
    columns.extend(fields.iter().copied().filter(|f| *f != name_col));

    let sql = format!(
        "SELECT {} FROM {} ORDER BY rowid ASC",
        columns.join(", "),
        doctype.table()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        let name = match row.get_ref(0)? {
            ValueRef::Integer(i) => i.to_string(),
            other => crate::models::document::value_text(Some(&to_json(other))),
        };

        let mut doc = Document::new(name);
        for (i, col) in columns.iter().enumerate() {
            doc.fields.insert(col.to_string(), to_json(row.get_ref(i)?));
        }
        Ok(doc)
    })?;

    let mut docs = Vec::new();
    for r in rows {
        docs.push(r?);
    }
    Ok(docs)
}
