//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Ingestion produced no documents")]
    NoDocuments,

    #[error("No files staged for submission")]
    NothingStaged,

    #[error("Invalid view option: {0}")]
    InvalidView(String),

    #[error("Invalid provider: {0}")]
    InvalidProvider(String),
}
