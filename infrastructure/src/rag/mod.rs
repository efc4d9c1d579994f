//! HTTP adapter for the RAG service

pub mod client;
pub mod dto;

pub use client::HttpRagBackend;
