use crate::models::document::Document;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const STATUS_ONLINE: &str = "Online";
pub const STATUS_OFFLINE: &str = "Offline";

/// An attendance device as stored by the host.
///
/// `status` is kept as the raw string the host holds: anything other than
/// "Online" (including a missing value) is displayed as Offline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceDeviceRecord {
    pub serial_number: String,
    pub device_name: String,
    pub ip_address: Option<String>,
    pub status: Option<String>,
    pub last_sync_time: Option<NaiveDateTime>,
}

impl AttendanceDeviceRecord {
    pub fn new(serial_number: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
            ..Self::default()
        }
    }

    /// Default display name for a device saved without one.
    pub fn default_name(serial_number: &str) -> String {
        format!("ZKTeco Device {}", serial_number)
    }

    /// Fill in derived fields before the record is persisted.
    pub fn before_save(&mut self) {
        if self.device_name.is_empty() {
            self.device_name = Self::default_name(&self.serial_number);
        }
    }

    pub fn is_online(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ONLINE)
    }

    /// Build the record from a fetched list row. Ill-typed fields are
    /// treated as missing.
    pub fn from_document(doc: &Document) -> Self {
        let text = |field: &str| {
            doc.get(field)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self {
            serial_number: text("serial_number").unwrap_or_else(|| doc.name.clone()),
            device_name: text("device_name").unwrap_or_default(),
            ip_address: text("ip_address"),
            status: text("status"),
            last_sync_time: text("last_sync_time")
                .and_then(|s| crate::utils::time::parse_timestamp(&s).ok()),
        }
    }
}
