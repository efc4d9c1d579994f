//! Session state: single source of truth for everything the UI renders
//!
//! One record per session, created with defaults at session start and
//! discarded when the session ends. Collaborators (staging, ingestion,
//! model selection, chat backend) mutate it through the methods below
//! between render passes; decision logic only ever reads `&self`.

use crate::core::error::DomainError;
use crate::document::{DocumentInfo, StagedFile, UploadGeneration};
use crate::session::entities::ChatMessage;
use crate::view::ViewOption;

/// Files staged in the upload area, tagged with the generation they were
/// staged under. A batch whose generation no longer matches the session's
/// current generation is stale and reads as empty.
#[derive(Debug, Clone, Default)]
struct StagedBatch {
    generation: UploadGeneration,
    files: Vec<StagedFile>,
}

/// Per-session state record
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    // -- Readiness --
    chat_ready: bool,

    // -- Model selection (display + provenance) --
    model_label: Option<String>,
    ingested_provider: Option<String>,

    // -- Upload staging --
    generation: UploadGeneration,
    staged: StagedBatch,
    unsubmitted_files: bool,

    // -- Ingested corpus --
    documents: Vec<DocumentInfo>,

    // -- Conversation --
    history: Vec<ChatMessage>,

    // -- View selection --
    view: ViewOption,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Read-only snapshot accessors --

    /// True once ingestion of the submitted documents has completed.
    /// Guaranteed to imply a non-empty document list.
    pub fn chat_ready(&self) -> bool {
        self.chat_ready
    }

    /// Display label of the active model, if one has been selected.
    pub fn model_label(&self) -> Option<&str> {
        self.model_label.as_deref()
    }

    /// Provider that produced the current corpus embeddings, if any.
    pub fn ingested_provider(&self) -> Option<&str> {
        self.ingested_provider.as_deref()
    }

    /// Current staging generation.
    pub fn generation(&self) -> UploadGeneration {
        self.generation
    }

    /// Files staged under the *current* generation. A batch left over from
    /// a previous generation is invisible here, so stale references cannot
    /// be read after a rotation.
    pub fn staged_files(&self) -> &[StagedFile] {
        if self.staged.generation == self.generation {
            &self.staged.files
        } else {
            &[]
        }
    }

    /// True iff files are staged but not yet submitted for ingestion.
    pub fn unsubmitted_files(&self) -> bool {
        self.unsubmitted_files
    }

    /// Successfully ingested documents. May momentarily be non-empty while
    /// `chat_ready` is still false; the view gate checks both.
    pub fn documents(&self) -> &[DocumentInfo] {
        &self.documents
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn view(&self) -> ViewOption {
        self.view
    }

    // -- Collaborator boundaries (mutation) --

    /// Stage a file for the next submission. Refreshes the batch to the
    /// current generation if the previous one went stale.
    pub fn stage_file(&mut self, file: StagedFile) {
        if self.staged.generation != self.generation {
            self.staged = StagedBatch {
                generation: self.generation,
                files: Vec::new(),
            };
        }
        self.staged.files.push(file);
        self.unsubmitted_files = true;
    }

    /// Clear the staging area and rotate the generation so any outstanding
    /// reference to the old batch becomes invisible.
    pub fn clear_staged(&mut self) {
        self.generation = self.generation.next();
        self.staged = StagedBatch {
            generation: self.generation,
            files: Vec::new(),
        };
        self.unsubmitted_files = false;
    }

    /// Apply a successful ingestion result: set the corpus, flip readiness,
    /// clear the unsubmitted flag, and rotate the staging generation.
    ///
    /// Refuses an empty document list: readiness must never be observable
    /// with nothing to query.
    pub fn complete_ingestion(
        &mut self,
        documents: Vec<DocumentInfo>,
        provider: impl Into<String>,
    ) -> Result<(), DomainError> {
        if documents.is_empty() {
            return Err(DomainError::NoDocuments);
        }
        self.documents = documents;
        self.ingested_provider = Some(provider.into());
        self.chat_ready = true;
        self.clear_staged();
        Ok(())
    }

    /// Drop readiness without touching the corpus. Used when the embedding
    /// provider changes after ingestion; documents stay listed but chat and
    /// inspector are gated off until re-submission.
    pub fn invalidate_readiness(&mut self) {
        self.chat_ready = false;
        self.ingested_provider = None;
    }

    pub fn set_model_label(&mut self, label: impl Into<String>) {
        self.model_label = Some(label.into());
    }

    pub fn set_view(&mut self, view: ViewOption) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.history.push(message);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(name: &str) -> StagedFile {
        StagedFile::new(format!("/docs/{name}"))
    }

    fn docs(n: usize) -> Vec<DocumentInfo> {
        (0..n)
            .map(|i| DocumentInfo::new(format!("doc-{i}.pdf"), 10 + i))
            .collect()
    }

    #[test]
    fn test_fresh_session_defaults() {
        let state = SessionState::new();
        assert!(!state.chat_ready());
        assert_eq!(state.model_label(), None);
        assert!(state.staged_files().is_empty());
        assert!(!state.unsubmitted_files());
        assert!(state.documents().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.view(), ViewOption::Chat);
    }

    #[test]
    fn test_staging_sets_unsubmitted() {
        let mut state = SessionState::new();
        state.stage_file(staged("a.pdf"));
        state.stage_file(staged("b.pdf"));
        assert_eq!(state.staged_files().len(), 2);
        assert!(state.unsubmitted_files());
        assert!(!state.chat_ready());
    }

    #[test]
    fn test_clear_staged_rotates_generation() {
        let mut state = SessionState::new();
        let before = state.generation();
        state.stage_file(staged("a.pdf"));
        state.clear_staged();
        assert!(state.generation() > before);
        assert!(state.staged_files().is_empty());
        assert!(!state.unsubmitted_files());
    }

    #[test]
    fn test_stale_batch_reads_empty() {
        let mut state = SessionState::new();
        state.stage_file(staged("a.pdf"));
        // Rotate the generation without going through clear_staged's batch
        // reset, simulating an external widget reset.
        state.generation = state.generation.next();
        assert!(state.staged_files().is_empty());

        // Staging again refreshes the batch under the new generation.
        state.stage_file(staged("b.pdf"));
        assert_eq!(state.staged_files().len(), 1);
        assert_eq!(state.staged_files()[0].name, "b.pdf");
    }

    #[test]
    fn test_complete_ingestion_contract() {
        let mut state = SessionState::new();
        state.stage_file(staged("a.pdf"));
        state.stage_file(staged("b.pdf"));
        let gen_before = state.generation();

        state.complete_ingestion(docs(2), "openai").unwrap();

        assert!(state.chat_ready());
        assert_eq!(state.documents().len(), 2);
        assert!(!state.unsubmitted_files());
        assert!(state.staged_files().is_empty());
        assert!(state.generation() > gen_before);
        assert_eq!(state.ingested_provider(), Some("openai"));
    }

    #[test]
    fn test_complete_ingestion_rejects_empty() {
        let mut state = SessionState::new();
        let err = state.complete_ingestion(Vec::new(), "openai").unwrap_err();
        assert!(matches!(err, DomainError::NoDocuments));
        // Readiness must not leak out of the failed call
        assert!(!state.chat_ready());
        assert!(state.documents().is_empty());
    }

    #[test]
    fn test_invalidate_readiness_keeps_documents() {
        let mut state = SessionState::new();
        state.complete_ingestion(docs(1), "openai").unwrap();
        state.invalidate_readiness();
        assert!(!state.chat_ready());
        assert_eq!(state.documents().len(), 1);
        assert_eq!(state.ingested_provider(), None);
    }

    #[test]
    fn test_view_toggle() {
        let mut state = SessionState::new();
        state.toggle_view();
        assert_eq!(state.view(), ViewOption::Inspector);
        state.set_view(ViewOption::Chat);
        assert_eq!(state.view(), ViewOption::Chat);
    }

    #[test]
    fn test_history_push_and_clear() {
        let mut state = SessionState::new();
        state.push_message(ChatMessage::user("hi"));
        state.push_message(ChatMessage::assistant("hello"));
        assert_eq!(state.history().len(), 2);
        state.clear_history();
        assert!(state.history().is_empty());
    }
}
