//! Console messages with a leading icon. These are the user-facing half of
//! logging; persistent entries go to the `log` table (see `db::log`).

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(colour: Colour, glyph: &str) -> String {
    Style::new().bold().fg(colour).paint(glyph).to_string()
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Red, ICON_ERR), msg);
}

/// Section header above list output
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}\n", Style::new().bold().fg(Colour::Blue).paint(msg.to_string()));
}
