use crate::db::log::load_audit;
use crate::errors::AppResult;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_TARGET_MAX: usize = 60;

/// Colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "device_add" | "punch_add" => Colour::Green,
        "device_status" => Colour::Yellow,
        "punch_mark" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out = s.chars().take(max.saturating_sub(3)).collect::<String>();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct AuditLogic;

impl AuditLogic {
    /// Render the internal log, one line per entry, oldest first.
    pub fn render(conn: &Connection, color: bool) -> AppResult<String> {
        let entries = load_audit(conn)?;
        if entries.is_empty() {
            return Ok("No entries in the internal log.\n".to_string());
        }

        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate(&op_target, OP_TARGET_MAX)
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (entry, op_target) in entries.iter().zip(op_targets) {
            // only the operation word is coloured
            let shown = if color {
                let paint = color_for_operation(&entry.operation);
                match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", paint.paint(op), rest),
                    None => paint.paint(op_target.as_str()).to_string(),
                }
            } else {
                op_target
            };

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {} => {}\n",
                entry.id,
                entry.date,
                pad_right(&shown, op_w),
                entry.message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        Ok(out)
    }
}
