//! Unified application error type.
//! The time-accounting core never fails; everything around it (config,
//! cli, ui) returns AppError to keep the error handling consistent.

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
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM, 24-hour)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (expected e.g. 8h, 45m, 7h30m)")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration to {0}")]
    ConfigSave(String),

    // ---------------------------
    // User interaction
    // ---------------------------
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

pub type AppResult<T> = Result<T, AppError>;
