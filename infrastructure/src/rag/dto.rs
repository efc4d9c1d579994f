//! Wire types for the RAG service API

use docchat_domain::{ChatMessage, DocumentInfo, StagedFile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct IngestRequest {
    pub provider: String,
    pub files: Vec<String>,
}

impl IngestRequest {
    pub fn new(files: &[StagedFile], provider: &str) -> Self {
        Self {
            provider: provider.to_string(),
            files: files
                .iter()
                .map(|f| f.path.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IngestResponse {
    pub documents: Vec<IngestedDocument>,
}

#[derive(Debug, Deserialize)]
pub struct IngestedDocument {
    pub name: String,
    pub chunks: usize,
}

impl From<IngestedDocument> for DocumentInfo {
    fn from(doc: IngestedDocument) -> Self {
        DocumentInfo::new(doc.name, doc.chunks)
    }
}

#[derive(Debug, Serialize)]
pub struct QueryRequest {
    pub provider: String,
    pub model: String,
    pub question: String,
    pub history: Vec<WireMessage>,
}

#[derive(Debug, Serialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: match msg.role {
                docchat_domain::Role::User => "user".into(),
                docchat_domain::Role::Assistant => "assistant".into(),
                docchat_domain::Role::System => "system".into(),
            },
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct InspectRequest {
    pub provider: String,
    pub model: String,
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct InspectResponse {
    pub chunks: Vec<InspectedChunk>,
}

#[derive(Debug, Deserialize)]
pub struct InspectedChunk {
    pub source: String,
    pub score: f32,
    pub text: String,
}
