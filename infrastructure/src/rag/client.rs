//! HTTP RAG backend: implements the application ports over JSON endpoints

use crate::error::InfraError;
use crate::rag::dto::{
    IngestRequest, IngestResponse, InspectRequest, InspectResponse, QueryRequest, QueryResponse,
    WireMessage,
};
use async_trait::async_trait;
use docchat_application::{
    AppError, ChatPort, IngestionPort, InspectorPort, ModelSelection, RetrievedChunk,
};
use docchat_domain::{ChatMessage, DocumentInfo, StagedFile};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Client for the retrieval service that owns parsing, chunking,
/// embedding, and answer generation. One instance per session is shared
/// across all three ports.
#[derive(Clone)]
pub struct HttpRagBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRagBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Resp, InfraError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST to RAG service");
        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfraError::Service {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl IngestionPort for HttpRagBackend {
    async fn ingest(
        &self,
        files: &[StagedFile],
        provider: &str,
    ) -> Result<Vec<DocumentInfo>, AppError> {
        info!(count = files.len(), provider, "ingesting staged files");
        let response: IngestResponse = self
            .post("/ingest", &IngestRequest::new(files, provider))
            .await?;
        Ok(response.documents.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ChatPort for HttpRagBackend {
    async fn answer(
        &self,
        question: &str,
        history: &[ChatMessage],
        selection: &ModelSelection,
    ) -> Result<String, AppError> {
        let payload = QueryRequest {
            provider: selection.provider.clone(),
            model: selection.model.clone(),
            question: question.to_string(),
            history: history.iter().map(WireMessage::from).collect(),
        };
        let response: QueryResponse = self.post("/query", &payload).await?;
        Ok(response.answer)
    }
}

#[async_trait]
impl InspectorPort for HttpRagBackend {
    async fn inspect(
        &self,
        query: &str,
        selection: &ModelSelection,
    ) -> Result<Vec<RetrievedChunk>, AppError> {
        let payload = InspectRequest {
            provider: selection.provider.clone(),
            model: selection.model.clone(),
            query: query.to_string(),
        };
        let response: InspectResponse = self.post("/inspect", &payload).await?;
        Ok(response
            .chunks
            .into_iter()
            .map(|c| RetrievedChunk {
                source: c.source,
                score: c.score,
                text: c.text,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let backend = HttpRagBackend::new("http://localhost:8800/");
        assert_eq!(backend.url("/ingest"), "http://localhost:8800/ingest");

        let backend = HttpRagBackend::new("http://localhost:8800");
        assert_eq!(backend.url("/query"), "http://localhost:8800/query");
    }
}
