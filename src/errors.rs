//! Unified application error type.
//! Every module (core, config, db, export, cli) returns AppError so error
//! handling stays consistent from the engine up to the binary.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Engine errors
    // ---------------------------
    /// An identifier that is not part of the static configuration.
    /// This is a configuration mismatch, not a runtime fault.
    #[error("Unknown {kind} identifier: '{id}'")]
    UnknownKey { kind: &'static str, id: String },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        AppError::UnknownKey {
            kind,
            id: id.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
