//! Collaborator ports: the boundary to the retrieval backend
//!
//! The coordinator never talks to the RAG service directly; it goes
//! through these traits so the whole decision layer stays testable with
//! in-memory fakes.

use crate::error::AppError;
use async_trait::async_trait;
use docchat_domain::{ChatMessage, DocumentInfo, StagedFile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The provider/model pair currently selected in the sidebar. Passed
/// through to the backend opaquely; the coordinator does not interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    pub provider: String,
    pub model: String,
}

impl ModelSelection {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

/// A chunk returned by the retrieval inspector, with its relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub source: String,
    pub score: f32,
    pub text: String,
}

/// Consumes staged files and turns them into a queryable corpus.
///
/// Success semantics (applied by the controller, not the port): the
/// returned documents become the corpus, the unsubmitted flag clears,
/// readiness flips on, and the staging generation rotates. On failure
/// readiness stays off.
#[async_trait]
pub trait IngestionPort: Send + Sync {
    async fn ingest(
        &self,
        files: &[StagedFile],
        provider: &str,
    ) -> Result<Vec<DocumentInfo>, AppError>;
}

/// Answers a question against the ingested corpus.
#[async_trait]
pub trait ChatPort: Send + Sync {
    async fn answer(
        &self,
        question: &str,
        history: &[ChatMessage],
        selection: &ModelSelection,
    ) -> Result<String, AppError>;
}

/// Runs a retrieval-only query and returns the chunks that would feed the
/// prompt, for inspection.
#[async_trait]
pub trait InspectorPort: Send + Sync {
    async fn inspect(
        &self,
        query: &str,
        selection: &ModelSelection,
    ) -> Result<Vec<RetrievedChunk>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_display() {
        let sel = ModelSelection::new("openai", "gpt-4o-mini");
        assert_eq!(sel.to_string(), "openai/gpt-4o-mini");
    }

    #[test]
    fn test_retrieved_chunk_serde() {
        let chunk = RetrievedChunk {
            source: "report.pdf".into(),
            score: 0.87,
            text: "Revenue grew 12%".into(),
        };
        let json = serde_json::to_string(&chunk).unwrap();
        let back: RetrievedChunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source, "report.pdf");
        assert!((back.score - 0.87).abs() < f32::EPSILON);
    }
}
