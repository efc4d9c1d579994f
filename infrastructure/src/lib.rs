//! Infrastructure layer for docchat
//!
//! Adapters implementing the application ports. Currently one adapter:
//! [`HttpRagBackend`], a JSON-over-HTTP client for the retrieval service
//! that does the actual PDF parsing, embedding, and answering.

pub mod error;
pub mod rag;

pub use error::InfraError;
pub use rag::HttpRagBackend;
