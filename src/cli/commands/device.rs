use crate::cli::parser::{Commands, DeviceAction};
use crate::config::Config;
use crate::core::device::DeviceLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::AttendanceDeviceRecord;
use crate::ui::messages::success;
use crate::utils::time::format_timestamp;

fn describe(device: &AttendanceDeviceRecord) -> String {
    let sync = device
        .last_sync_time
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "never".to_string());
    format!(
        "{} '{}' status={} last_sync={}",
        device.serial_number,
        device.device_name,
        device.status.as_deref().unwrap_or("--"),
        sync
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Device { action } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        match action {
            DeviceAction::Add {
                serial,
                name,
                ip,
                status,
            } => {
                let device = DeviceLogic::add(
                    &pool.conn,
                    serial,
                    name.as_deref(),
                    ip.as_deref(),
                    status.as_deref(),
                )?;
                success(format!("Device saved: {}", describe(&device)));
            }
            DeviceAction::Status { serial, status } => {
                let device = DeviceLogic::set_status(&pool.conn, serial, status)?;
                success(format!("Device updated: {}", describe(&device)));
            }
        }
    }

    Ok(())
}
