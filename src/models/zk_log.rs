use crate::models::document::Document;
use crate::models::punch_type::PunchType;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One punch received from a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZkLogRecord {
    pub id: i64,
    pub device_sn: String,
    pub user_id: String,
    pub timestamp: Option<NaiveDateTime>,
    pub punch_type: Option<PunchType>,
    pub processed: bool,
}

impl ZkLogRecord {
    pub fn pending(device_sn: &str, user_id: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            id: 0,
            device_sn: device_sn.to_string(),
            user_id: user_id.to_string(),
            timestamp: Some(timestamp),
            punch_type: Some(PunchType::default()),
            processed: false,
        }
    }

    /// Build the record from a fetched list row. `processed` follows loose
    /// truthiness, so 1/true/"x" are processed and 0/false/null/missing are not.
    pub fn from_document(doc: &Document) -> Self {
        let text = |field: &str| doc.get(field).and_then(|v| v.as_str()).map(str::to_string);

        Self {
            id: doc
                .get("id")
                .and_then(|v| v.as_i64())
                .or_else(|| doc.name.parse().ok())
                .unwrap_or_default(),
            device_sn: text("device_sn").unwrap_or_default(),
            user_id: text("user_id").unwrap_or_default(),
            timestamp: text("timestamp")
                .and_then(|s| crate::utils::time::parse_timestamp(&s).ok()),
            punch_type: text("punch_type").and_then(|s| PunchType::from_db_str(&s)),
            processed: doc.truthy("processed"),
        }
    }
}
