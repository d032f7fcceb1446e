//! Error types for the knowledge base library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown business area '{0}' (expected one of: marketing, sales, logistics, hr, finance, it, general)")]
    UnknownBusinessArea(String),

    #[error("Unknown result kind '{0}' (expected 'grounded' or 'analysis')")]
    UnknownResultKind(String),

    #[error("Unknown export format '{0}' (expected 'markdown', 'csv' or 'json')")]
    UnknownExportFormat(String),

    #[error("Invalid analysis result: {0}")]
    InvalidResult(String),

    #[error("A record with id '{0}' already exists")]
    DuplicateId(String),

    #[error("No record with id '{0}'")]
    RecordNotFound(String),
}

pub type KbResult<T> = std::result::Result<T, KbError>;
