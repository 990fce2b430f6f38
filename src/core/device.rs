use crate::db::log::audit_or_warn;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceDeviceRecord;
use crate::models::device::{STATUS_OFFLINE, STATUS_ONLINE};
use crate::utils::time;
use rusqlite::Connection;

pub struct DeviceLogic;

impl DeviceLogic {
    /// Create or update a device. For a new device the status defaults to
    /// Offline and the name to "ZKTeco Device <serial>"; on an existing one
    /// omitted fields keep their stored values.
    pub fn add(
        conn: &Connection,
        serial_number: &str,
        device_name: Option<&str>,
        ip_address: Option<&str>,
        status: Option<&str>,
    ) -> AppResult<AttendanceDeviceRecord> {
        let serial_number = serial_number.trim();
        if serial_number.is_empty() {
            return Err(AppError::Other("serial number must not be empty".into()));
        }

        let mut device = queries::load_device(conn, serial_number)?.unwrap_or_else(|| {
            let mut new = AttendanceDeviceRecord::new(serial_number);
            new.status = Some(STATUS_OFFLINE.to_string());
            new
        });

        if let Some(name) = device_name {
            device.device_name = name.to_string();
        }
        if let Some(ip) = ip_address {
            device.ip_address = Some(ip.to_string());
        }
        if let Some(status) = status {
            device.status = Some(status.to_string());
            if status == STATUS_ONLINE {
                device.last_sync_time = Some(time::now());
            }
        }
        device.before_save();

        queries::upsert_device(conn, &device)?;
        audit_or_warn(
            conn,
            "device_add",
            serial_number,
            &format!("Saved device '{}'", device.device_name),
        );

        queries::load_device(conn, serial_number)?
            .ok_or_else(|| AppError::DeviceNotFound(serial_number.to_string()))
    }

    /// Store `status` verbatim. Unknown values are accepted and will show
    /// as Offline in the list.
    pub fn set_status(
        conn: &Connection,
        serial_number: &str,
        status: &str,
    ) -> AppResult<AttendanceDeviceRecord> {
        let last_sync_time = (status == STATUS_ONLINE).then(time::now);
        queries::set_device_status(conn, serial_number, status, last_sync_time)?;

        if status != STATUS_ONLINE && status != STATUS_OFFLINE {
            crate::ui::messages::warning(format!(
                "Status '{}' is not Online/Offline; it will be listed as Offline",
                status
            ));
        }

        audit_or_warn(
            conn,
            "device_status",
            serial_number,
            &format!("Status set to '{}'", status),
        );

        queries::load_device(conn, serial_number)?
            .ok_or_else(|| AppError::DeviceNotFound(serial_number.to_string()))
    }
}
