//! Application error types

use docchat_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by use cases and ports
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("No files staged for submission")]
    NothingStaged,

    #[error("Chat history is empty, nothing to export")]
    NothingToExport,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
