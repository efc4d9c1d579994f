//! Backend events: results of spawned collaborator work
//!
//! Blocking work (ingestion, answering, inspection) runs in spawned tasks
//! and reports back over a channel. Events are applied to session state
//! between render passes, so each pass sees a consistent snapshot.

use docchat_application::{AppError, RetrievedChunk};
use docchat_domain::DocumentInfo;

/// Event sent back from a spawned backend task
#[derive(Debug)]
pub enum BackendEvent {
    IngestionFinished(Result<Vec<DocumentInfo>, AppError>),
    AnswerFinished {
        question: String,
        result: Result<String, AppError>,
    },
    InspectionFinished {
        query: String,
        result: Result<Vec<RetrievedChunk>, AppError>,
    },
}
