//! Application layer for docchat
//!
//! Use cases and ports sitting between the domain state and the
//! infrastructure adapters. The [`SessionController`] owns the session
//! mutation boundaries: staging, submission, model selection, question
//! routing, and transcript export.

pub mod controller;
pub mod error;
pub mod export;
pub mod ports;

// Re-export commonly used types
pub use controller::SessionController;
pub use error::AppError;
pub use export::{transcript_file_name, transcript_json, write_transcript};
pub use ports::{ChatPort, IngestionPort, InspectorPort, ModelSelection, RetrievedChunk};
