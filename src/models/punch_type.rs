use crate::errors::AppError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PunchType {
    #[default]
    In,
    Out,
}

impl PunchType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchType::In => "IN",
            PunchType::Out => "OUT",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(PunchType::In),
            "OUT" => Some(PunchType::Out),
            _ => None,
        }
    }

    /// Raw device punch state: "0" is a check-in, anything else a check-out.
    pub fn from_device_state(state: &str) -> Self {
        if state.trim() == "0" {
            PunchType::In
        } else {
            PunchType::Out
        }
    }
}

impl FromStr for PunchType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IN" | "0" => Ok(PunchType::In),
            "OUT" | "1" => Ok(PunchType::Out),
            _ => Err(AppError::InvalidPunchType(s.to_string())),
        }
    }
}
