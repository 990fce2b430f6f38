//! List-row status indicators: a label, a color token and the filter
//! expression the host applies when the indicator is clicked.

pub mod color;
pub mod filter;
pub mod resolver;

pub use color::IndicatorColor;
pub use filter::{FilterExpr, FilterOp};
pub use resolver::{IndicatorResolver, Resolver, resolve_device_indicator, resolve_log_indicator};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub label: String,
    pub color: IndicatorColor,
    pub filter: FilterExpr,
}

impl Indicator {
    pub fn new(label: impl Into<String>, color: IndicatorColor, filter: FilterExpr) -> Self {
        Self {
            label: label.into(),
            color,
            filter,
        }
    }

    /// The `(label, color, filter)` triple in the host's wire form.
    pub fn to_triple(&self) -> (String, &'static str, String) {
        (
            self.label.clone(),
            self.color.as_str(),
            self.filter.to_string(),
        )
    }
}
