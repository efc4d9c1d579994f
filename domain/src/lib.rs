//! Domain layer for docchat
//!
//! This crate contains the session state and value objects that drive the
//! view coordinator. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! One user's interaction lifetime with the tool. All state lives in a
//! single [`SessionState`] record that external collaborators (upload
//! staging, ingestion, model selection, chat backend) mutate between
//! render passes. Decision logic only ever reads a snapshot.
//!
//! ## Readiness
//!
//! `chat_ready` is the precondition gating chat and inspector interaction.
//! It is set only after successful ingestion and can never be observed
//! true while the ingested document list is empty.

pub mod core;
pub mod document;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use document::{DocumentInfo, StagedFile, UploadGeneration};
pub use session::{
    entities::{ChatMessage, Role},
    state::SessionState,
};
pub use view::ViewOption;
