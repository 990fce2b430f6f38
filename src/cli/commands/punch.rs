use crate::cli::parser::{Commands, PunchAction};
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { action } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        match action {
            PunchAction::Add {
                device_sn,
                user_id,
                timestamp,
                punch_type,
            } => {
                let log =
                    PunchLogic::add(&pool.conn, device_sn, user_id, timestamp, punch_type.as_deref())?;
                success(format!(
                    "Punch #{} recorded ({} for user {})",
                    log.id,
                    log.punch_type.map(|p| p.to_db_str()).unwrap_or("--"),
                    log.user_id
                ));
            }
            PunchAction::Mark { id, pending } => {
                let log = PunchLogic::mark(&pool.conn, *id, !*pending)?;
                let state = if log.processed { "processed" } else { "pending" };
                success(format!("Punch #{} marked as {}", log.id, state));
            }
        }
    }

    Ok(())
}
