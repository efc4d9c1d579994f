//! Infrastructure error types

use docchat_application::AppError;
use thiserror::Error;

/// Errors from the HTTP RAG adapter
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("RAG service returned {status}: {body}")]
    Service { status: u16, body: String },
}

impl From<InfraError> for AppError {
    fn from(err: InfraError) -> Self {
        AppError::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = InfraError::Service {
            status: 503,
            body: "ingestion worker down".into(),
        };
        assert_eq!(
            err.to_string(),
            "RAG service returned 503: ingestion worker down"
        );
    }

    #[test]
    fn test_conversion_to_app_error() {
        let err: AppError = InfraError::Service {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert!(matches!(err, AppError::Backend(_)));
    }
}
