use crate::db::log::audit_or_warn;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{PunchType, ZkLogRecord};
use crate::utils::time::parse_timestamp;
use rusqlite::Connection;

pub struct PunchLogic;

impl PunchLogic {
    /// Record a pending punch. The punch type defaults to IN.
    pub fn add(
        conn: &Connection,
        device_sn: &str,
        user_id: &str,
        timestamp: &str,
        punch_type: Option<&str>,
    ) -> AppResult<ZkLogRecord> {
        let ts = parse_timestamp(timestamp)?;
        let punch_type = match punch_type {
            Some(p) => p.parse::<PunchType>()?,
            None => PunchType::default(),
        };

        let mut log = ZkLogRecord::pending(device_sn, user_id, ts);
        log.punch_type = Some(punch_type);

        let id = queries::insert_zk_log(conn, &log)?;
        audit_or_warn(
            conn,
            "punch_add",
            &id.to_string(),
            &format!(
                "{} {} for user {} on {}",
                punch_type.to_db_str(),
                timestamp.trim(),
                user_id,
                device_sn
            ),
        );

        queries::load_zk_log(conn, id)?.ok_or(AppError::LogNotFound(id))
    }

    pub fn mark(conn: &Connection, id: i64, processed: bool) -> AppResult<ZkLogRecord> {
        queries::set_processed(conn, id, processed)?;
        audit_or_warn(
            conn,
            "punch_mark",
            &id.to_string(),
            if processed {
                "Marked as processed"
            } else {
                "Marked as pending"
            },
        );

        queries::load_zk_log(conn, id)?.ok_or(AppError::LogNotFound(id))
    }
}
