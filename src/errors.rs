//! Unified application error type.
//! All modules (core, cli, config, output) return AppError to keep the error
//! handling consistent and easy to manage.

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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Clipboard
    // ---------------------------
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // ---------------------------
    // Form / input errors
    // ---------------------------
    #[error("Invalid ratio index: {0}")]
    InvalidRatioIndex(usize),

    #[error("Invalid result index: {0}")]
    InvalidResultIndex(usize),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<arboard::Error> for AppError {
    fn from(e: arboard::Error) -> Self {
        AppError::Clipboard(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
