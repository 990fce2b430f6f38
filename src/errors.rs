//! Unified application error type.
//! Every module outside the resolvers returns AppError; the resolvers
//! themselves are total and never fail.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Translation file error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid filter expression: {0}")]
    InvalidFilter(String),

    #[error("Unknown document type: {0}")]
    InvalidDocType(String),

    #[error("Invalid timestamp (expected YYYY-MM-DD HH:MM:SS): {0}")]
    InvalidTimestamp(String),

    #[error("Invalid punch type (expected IN, OUT, 0 or 1): {0}")]
    InvalidPunchType(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Attendance device not found: {0}")]
    DeviceNotFound(String),

    #[error("ZK log entry not found: {0}")]
    LogNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
