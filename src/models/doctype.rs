use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Document types known to the list-view host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocType {
    AttendanceDevice,
    ZkLog,
}

impl DocType {
    /// Host-facing name, e.g. "Attendance Device".
    pub fn name(&self) -> &'static str {
        match self {
            DocType::AttendanceDevice => "Attendance Device",
            DocType::ZkLog => "ZK Log",
        }
    }

    /// Backing SQLite table.
    pub fn table(&self) -> &'static str {
        match self {
            DocType::AttendanceDevice => "attendance_device",
            DocType::ZkLog => "zk_log",
        }
    }

    /// Columns a list query may fetch or filter on.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            DocType::AttendanceDevice => &[
                "serial_number",
                "device_name",
                "ip_address",
                "status",
                "last_sync_time",
            ],
            DocType::ZkLog => &[
                "id",
                "device_sn",
                "user_id",
                "timestamp",
                "punch_type",
                "processed",
            ],
        }
    }

    /// Column used as the row name in list output.
    pub fn name_column(&self) -> &'static str {
        match self {
            DocType::AttendanceDevice => "serial_number",
            DocType::ZkLog => "id",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "attendance device" | "attendance_device" | "device" => Ok(DocType::AttendanceDevice),
            "zk log" | "zk_log" | "log" => Ok(DocType::ZkLog),
            _ => Err(AppError::InvalidDocType(s.to_string())),
        }
    }
}
