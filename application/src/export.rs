//! Transcript export: chat history as a timestamped JSON file
//!
//! Mirrors the download affordance of the web front end: only offered
//! when the history is non-empty, never part of the render path itself.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use docchat_domain::ChatMessage;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialize the history to pretty-printed JSON.
pub fn transcript_json(history: &[ChatMessage]) -> Result<String, AppError> {
    if history.is_empty() {
        return Err(AppError::NothingToExport);
    }
    Ok(serde_json::to_string_pretty(history)?)
}

/// File name for an export taken at `now`, e.g.
/// `chat_history_20260827_134500.json`.
pub fn transcript_file_name(now: DateTime<Utc>) -> String {
    format!("chat_history_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Write the transcript into `dir` and return the created path.
pub fn write_transcript(history: &[ChatMessage], dir: &Path) -> Result<PathBuf, AppError> {
    let json = transcript_json(history)?;
    let path = dir.join(transcript_file_name(Utc::now()));
    std::fs::write(&path, json)?;
    info!(path = %path.display(), messages = history.len(), "transcript exported");
    Ok(path)
}
