//! The list-rendering contract: per-doctype settings, an explicitly built
//! registry and the row renderer.

pub mod render;
pub mod settings;

pub use render::{ListRow, ListView};
pub use settings::{DeviceListView, ListViewRegistry, ListViewSettings, ZkLogListView};
