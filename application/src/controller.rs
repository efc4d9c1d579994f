//! Session controller: the mutation side of the coordinator
//!
//! Owns the session mutation boundaries: staging, submission, ingestion
//! application, model selection (with the provider-change check), and
//! question routing. Render-side decision logic never goes through here;
//! it reads the `SessionState` snapshot directly.

use crate::error::AppError;
use crate::ports::{ChatPort, IngestionPort, InspectorPort, ModelSelection, RetrievedChunk};
use docchat_domain::{DocumentInfo, SessionState, StagedFile};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct SessionController<I, C, R> {
    ingestion: Arc<I>,
    chat: Arc<C>,
    inspector: Arc<R>,
    selection: ModelSelection,
}

impl<I, C, R> SessionController<I, C, R>
where
    I: IngestionPort,
    C: ChatPort,
    R: InspectorPort,
{
    pub fn new(
        ingestion: Arc<I>,
        chat: Arc<C>,
        inspector: Arc<R>,
        selection: ModelSelection,
    ) -> Self {
        Self {
            ingestion,
            chat,
            inspector,
            selection,
        }
    }

    /// Current provider/model selection (passed through to regions opaquely).
    pub fn selection(&self) -> &ModelSelection {
        &self.selection
    }

    /// Clone of the ingestion port for spawned submission tasks.
    pub fn ingestion_port(&self) -> Arc<I> {
        Arc::clone(&self.ingestion)
    }

    /// Clone of the chat port for spawned question tasks.
    pub fn chat_port(&self) -> Arc<C> {
        Arc::clone(&self.chat)
    }

    /// Clone of the inspector port for spawned inspect tasks.
    pub fn inspector_port(&self) -> Arc<R> {
        Arc::clone(&self.inspector)
    }

    /// Stage a file path for the next submission.
    pub fn stage(&self, state: &mut SessionState, path: PathBuf) {
        let file = StagedFile::new(path);
        debug!(name = %file.name, "file staged");
        state.stage_file(file);
    }

    /// Submit the staged batch to the ingestion backend. The caller applies
    /// the result with [`Self::apply_ingestion`] once it arrives, so the
    /// session state is only mutated between render passes.
    pub async fn submit(&self, files: Vec<StagedFile>) -> Result<Vec<DocumentInfo>, AppError> {
        if files.is_empty() {
            return Err(AppError::NothingStaged);
        }
        info!(count = files.len(), provider = %self.selection.provider, "submitting staged files");
        self.ingestion
            .ingest(&files, &self.selection.provider)
            .await
    }

    /// Apply a successful ingestion result to the session.
    pub fn apply_ingestion(
        &self,
        state: &mut SessionState,
        documents: Vec<DocumentInfo>,
    ) -> Result<(), AppError> {
        state.complete_ingestion(documents, self.selection.provider.clone())?;
        state.set_model_label(self.selection.to_string());
        info!(documents = state.documents().len(), "ingestion applied, chat ready");
        Ok(())
    }

    /// Change the provider/model selection.
    ///
    /// Embeddings are provider-scoped: switching provider after ingestion
    /// drops readiness and the documents must be re-submitted. Switching
    /// only the model keeps the corpus usable. Returns true iff readiness
    /// was dropped.
    pub fn select_model(&mut self, state: &mut SessionState, selection: ModelSelection) -> bool {
        let provider_changed = state
            .ingested_provider()
            .is_some_and(|p| p != selection.provider);
        self.selection = selection;
        state.set_model_label(self.selection.to_string());

        if state.chat_ready() && provider_changed {
            warn!(provider = %self.selection.provider, "provider changed, re-ingestion required");
            state.invalidate_readiness();
            return true;
        }
        false
    }

    /// Route a question to the chat backend with the current selection.
    pub async fn ask(
        &self,
        question: &str,
        history: &[docchat_domain::ChatMessage],
    ) -> Result<String, AppError> {
        self.chat.answer(question, history, &self.selection).await
    }

    /// Run a retrieval-only inspection query.
    pub async fn inspect(&self, query: &str) -> Result<Vec<RetrievedChunk>, AppError> {
        self.inspector.inspect(query, &self.selection).await
    }
}
