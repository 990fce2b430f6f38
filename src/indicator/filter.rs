//! `field,op,value` filter expressions consumed by the host's query layer.

use crate::errors::AppError;
use crate::models::Document;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    NotEq,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::NotEq => "!=",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(FilterOp::Eq),
            "!=" => Some(FilterOp::NotEq),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FilterExpr {
    pub fn eq(field: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            op: FilterOp::Eq,
            value: value.to_string(),
        }
    }

    /// Compare the document's field, rendered as text, with the value.
    pub fn matches(&self, doc: &Document) -> bool {
        let actual = doc.text(&self.field);
        match self.op {
            FilterOp::Eq => actual == self.value,
            FilterOp::NotEq => actual != self.value,
        }
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.field, self.op.as_str(), self.value)
    }
}

impl FromStr for FilterExpr {
    type Err = AppError;

    /// Splits on the first two commas only; the value keeps any further commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let (Some(field), Some(op), Some(value)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::InvalidFilter(s.to_string()));
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(AppError::InvalidFilter(s.to_string()));
        }

        let op = FilterOp::from_token(op.trim())
            .ok_or_else(|| AppError::InvalidFilter(s.to_string()))?;

        Ok(Self {
            field: field.to_string(),
            op,
            value: value.to_string(),
        })
    }
}

impl Serialize for FilterExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
