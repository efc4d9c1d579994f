//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                  spawned backend tasks
//!   ├─ crossterm EventStream               ├─ ingestion_port.ingest()
//!   ├─ backend_rx (BackendEvent)           ├─ chat_port.answer()
//!   └─ tick_interval                       └─ inspector_port.inspect()
//!        └── backend_tx ─────────────<─────┘
//! ```
//!
//! Each external trigger (key event, backend event, tick) is followed by
//! exactly one render pass over the then-current snapshot; spawned tasks
//! never touch state directly.

use super::branding::Branding;
use super::command::{SessionCommand, parse_command};
use super::event::BackendEvent;
use super::gate::RegionPlan;
use super::mode::{Action, InputMode, KeyHandler};
use super::render;
use super::state::{InspectionResult, TuiState};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use docchat_application::{
    ChatPort, IngestionPort, InspectorPort, ModelSelection, SessionController, write_transcript,
};
use docchat_domain::{ChatMessage, ViewOption};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::error;

/// Main TUI application
pub struct TuiApp<I, C, R> {
    controller: SessionController<I, C, R>,
    branding: Branding,
    export_dir: PathBuf,
    initial_files: Vec<PathBuf>,
    backend_tx: mpsc::UnboundedSender<BackendEvent>,
    backend_rx: mpsc::UnboundedReceiver<BackendEvent>,
}

impl<I, C, R> TuiApp<I, C, R>
where
    I: IngestionPort + 'static,
    C: ChatPort + 'static,
    R: InspectorPort + 'static,
{
    pub fn new(
        controller: SessionController<I, C, R>,
        branding: Branding,
        export_dir: PathBuf,
    ) -> Self {
        let (backend_tx, backend_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            branding,
            export_dir,
            initial_files: Vec::new(),
            backend_tx,
            backend_rx,
        }
    }

    /// Files staged before the first render pass (from the command line).
    pub fn with_initial_files(mut self, files: Vec<PathBuf>) -> Self {
        self.initial_files = files;
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal even if a render panics
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        state
            .session
            .set_model_label(self.controller.selection().to_string());
        for path in std::mem::take(&mut self.initial_files) {
            self.controller.stage(&mut state.session, path);
        }

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| {
                render::render(frame, &state, &self.branding, self.controller.selection());
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                Some(backend_event) = self.backend_rx.recv() => {
                    self.apply_backend_event(&mut state, backend_event);
                }

                _ = tick.tick() => {
                    state.expire_flash(Duration::from_secs(4));
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            let action = KeyHandler::handle(state.mode, key);
            self.handle_action(state, action);
        }
    }

    fn handle_action(&mut self, state: &mut TuiState, action: Action) {
        match action {
            Action::EnterInsert => {
                // Structural gate: input only opens when the plan allows it
                let plan = RegionPlan::decide(&state.session);
                if plan.chat_input_active() || plan.inspector_active() {
                    state.mode = InputMode::Insert;
                } else {
                    state.set_flash("submit documents before typing (:add, :submit)");
                }
            }
            Action::EnterCommand => {
                state.mode = InputMode::Command;
            }
            Action::ExitToNormal => {
                state.mode = InputMode::Normal;
            }
            Action::Cancel => {
                state.take_command();
                state.mode = InputMode::Normal;
            }
            Action::Quit => {
                state.should_quit = true;
            }
            Action::Submit => match state.mode {
                InputMode::Insert => self.submit_input(state),
                InputMode::Command => {
                    let command = parse_command(&state.take_command());
                    state.mode = InputMode::Normal;
                    self.run_command(state, command);
                }
                InputMode::Normal => {}
            },
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.cursor_home(),
            Action::CursorEnd => state.cursor_end(),
            Action::ScrollUp => state.scroll_up(),
            Action::ScrollDown => state.scroll_down(),
            Action::ToggleView => {
                state.session.toggle_view();
                state.mode = InputMode::Normal;
            }
            Action::ShowHelp => state.show_help = !state.show_help,
            Action::None => {}
        }
    }

    /// Route submitted Insert-mode input to the active view's backend.
    fn submit_input(&mut self, state: &mut TuiState) {
        let text = state.take_input();
        state.mode = InputMode::Normal;
        if text.trim().is_empty() {
            return;
        }

        match state.session.view() {
            ViewOption::Chat => {
                if state.answer_pending {
                    state.set_flash("still answering the previous question");
                    return;
                }
                // Snapshot the history before appending the question; the
                // backend receives the question separately and must not see
                // it twice.
                let history = state.session.history().to_vec();
                state.session.push_message(ChatMessage::user(text.clone()));
                state.answer_pending = true;

                let port = self.controller.chat_port();
                let selection = self.controller.selection().clone();
                let tx = self.backend_tx.clone();
                tokio::spawn(async move {
                    let result = port.answer(&text, &history, &selection).await;
                    let _ = tx.send(BackendEvent::AnswerFinished {
                        question: text,
                        result,
                    });
                });
            }
            ViewOption::Inspector => {
                if state.inspection_pending {
                    state.set_flash("still retrieving the previous query");
                    return;
                }
                state.inspection_pending = true;

                let port = self.controller.inspector_port();
                let selection = self.controller.selection().clone();
                let tx = self.backend_tx.clone();
                tokio::spawn(async move {
                    let result = port.inspect(&text, &selection).await;
                    let _ = tx.send(BackendEvent::InspectionFinished {
                        query: text,
                        result,
                    });
                });
            }
        }
    }

    fn run_command(&mut self, state: &mut TuiState, command: SessionCommand) {
        match command {
            SessionCommand::Add(paths) => {
                // The completion path rotates the staging generation and
                // wipes the whole batch; files staged mid-flight would be
                // destroyed without ever reaching the backend.
                if state.ingestion_pending {
                    state.set_flash("ingestion running — stage more files once it finishes");
                    return;
                }
                let count = paths.len();
                for path in paths {
                    self.controller.stage(&mut state.session, path);
                }
                state.set_flash(format!("{count} file(s) staged"));
            }
            SessionCommand::Submit => {
                if state.ingestion_pending {
                    state.set_flash("ingestion already running");
                    return;
                }
                let files = state.session.staged_files().to_vec();
                if files.is_empty() {
                    state.set_flash("nothing staged — :add <path> first");
                    return;
                }
                state.ingestion_pending = true;

                let port = self.controller.ingestion_port();
                let provider = self.controller.selection().provider.clone();
                let tx = self.backend_tx.clone();
                tokio::spawn(async move {
                    let result = port.ingest(&files, &provider).await;
                    let _ = tx.send(BackendEvent::IngestionFinished(result));
                });
            }
            SessionCommand::Model { provider, model } => {
                let selection = ModelSelection::new(provider, model);
                let label = selection.to_string();
                let dropped = self.controller.select_model(&mut state.session, selection);
                if dropped {
                    state.set_flash(format!("{label} — provider changed, re-submit documents"));
                } else {
                    state.set_flash(format!("model set to {label}"));
                }
            }
            SessionCommand::View(view) => state.session.set_view(view),
            SessionCommand::Export => {
                match write_transcript(state.session.history(), &self.export_dir) {
                    Ok(path) => state.set_flash(format!("transcript saved: {}", path.display())),
                    Err(err) => state.set_flash(err.to_string()),
                }
            }
            SessionCommand::Clear => {
                state.session.clear_history();
                state.set_flash("history cleared");
            }
            SessionCommand::Help => state.show_help = true,
            SessionCommand::Quit => state.should_quit = true,
            SessionCommand::Empty => {}
            SessionCommand::Unknown(msg) => state.set_flash(msg),
        }
    }

    fn apply_backend_event(&mut self, state: &mut TuiState, event: BackendEvent) {
        match event {
            BackendEvent::IngestionFinished(result) => {
                state.ingestion_pending = false;
                match result {
                    Ok(documents) => {
                        match self.controller.apply_ingestion(&mut state.session, documents) {
                            Ok(()) => state.set_flash("corpus ready — ask away"),
                            // Empty result: readiness stays off by contract
                            Err(err) => state.set_flash(err.to_string()),
                        }
                    }
                    Err(err) => {
                        error!(%err, "ingestion failed");
                        state.set_flash(format!("ingestion failed: {err}"));
                    }
                }
            }
            BackendEvent::AnswerFinished { question: _, result } => {
                state.answer_pending = false;
                match result {
                    Ok(answer) => state.session.push_message(ChatMessage::assistant(answer)),
                    Err(err) => {
                        error!(%err, "chat backend failed");
                        state
                            .session
                            .push_message(ChatMessage::system(format!("error: {err}")));
                    }
                }
            }
            BackendEvent::InspectionFinished { query, result } => {
                state.inspection_pending = false;
                match result {
                    Ok(chunks) => state.inspection = Some(InspectionResult { query, chunks }),
                    Err(err) => {
                        error!(%err, "inspection failed");
                        state.set_flash(format!("inspection failed: {err}"));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docchat_application::{AppError, RetrievedChunk};
    use docchat_domain::{DocumentInfo, StagedFile};
    use std::sync::Arc;

    struct FakeBackend;

    #[async_trait]
    impl IngestionPort for FakeBackend {
        async fn ingest(
            &self,
            files: &[StagedFile],
            _provider: &str,
        ) -> Result<Vec<DocumentInfo>, AppError> {
            Ok(files
                .iter()
                .map(|f| DocumentInfo::new(f.name.clone(), 3))
                .collect())
        }
    }

    #[async_trait]
    impl ChatPort for FakeBackend {
        async fn answer(
            &self,
            question: &str,
            history: &[ChatMessage],
            _selection: &ModelSelection,
        ) -> Result<String, AppError> {
            Ok(format!("echo: {question} (history {})", history.len()))
        }
    }

    #[async_trait]
    impl InspectorPort for FakeBackend {
        async fn inspect(
            &self,
            _query: &str,
            _selection: &ModelSelection,
        ) -> Result<Vec<RetrievedChunk>, AppError> {
            Ok(Vec::new())
        }
    }

    fn app() -> TuiApp<FakeBackend, FakeBackend, FakeBackend> {
        let backend = Arc::new(FakeBackend);
        let controller = SessionController::new(
            Arc::clone(&backend),
            Arc::clone(&backend),
            backend,
            ModelSelection::new("openai", "gpt-4o-mini"),
        );
        TuiApp::new(controller, Branding::fallback(), std::env::temp_dir())
    }

    #[tokio::test]
    async fn test_insert_mode_blocked_before_readiness() {
        let mut app = app();
        let mut state = TuiState::new();

        app.handle_action(&mut state, Action::EnterInsert);
        assert_eq!(state.mode, InputMode::Normal);
        assert!(state.flash_message.is_some());
    }

    #[tokio::test]
    async fn test_insert_mode_opens_when_ready() {
        let mut app = app();
        let mut state = TuiState::new();
        state
            .session
            .complete_ingestion(vec![DocumentInfo::new("a.pdf", 3)], "openai")
            .unwrap();

        app.handle_action(&mut state, Action::EnterInsert);
        assert_eq!(state.mode, InputMode::Insert);
    }

    #[tokio::test]
    async fn test_ingestion_event_applies_success_contract() {
        let mut app = app();
        let mut state = TuiState::new();
        state.session.stage_file(StagedFile::new("/docs/a.pdf"));
        state.ingestion_pending = true;

        app.apply_backend_event(
            &mut state,
            BackendEvent::IngestionFinished(Ok(vec![DocumentInfo::new("a.pdf", 3)])),
        );

        assert!(!state.ingestion_pending);
        assert!(state.session.chat_ready());
        assert!(!state.session.unsubmitted_files());
        assert!(state.session.staged_files().is_empty());
    }

    #[tokio::test]
    async fn test_ingestion_failure_leaves_readiness_off() {
        let mut app = app();
        let mut state = TuiState::new();
        state.session.stage_file(StagedFile::new("/docs/a.pdf"));
        state.ingestion_pending = true;

        app.apply_backend_event(
            &mut state,
            BackendEvent::IngestionFinished(Err(AppError::Backend("parse error".into()))),
        );

        assert!(!state.session.chat_ready());
        assert!(state.session.unsubmitted_files());
        assert!(state.flash_message.is_some());
    }

    #[tokio::test]
    async fn test_empty_ingestion_result_keeps_readiness_off() {
        let mut app = app();
        let mut state = TuiState::new();
        state.ingestion_pending = true;

        app.apply_backend_event(&mut state, BackendEvent::IngestionFinished(Ok(Vec::new())));
        assert!(!state.session.chat_ready());
    }

    #[tokio::test]
    async fn test_answer_event_appends_message() {
        let mut app = app();
        let mut state = TuiState::new();
        state.answer_pending = true;

        app.apply_backend_event(
            &mut state,
            BackendEvent::AnswerFinished {
                question: "q".into(),
                result: Ok("the answer".into()),
            },
        );

        assert!(!state.answer_pending);
        assert_eq!(state.session.history().len(), 1);
        assert_eq!(state.session.history()[0].content, "the answer");
    }

    #[tokio::test]
    async fn test_staging_blocked_while_ingestion_pending() {
        let mut app = app();
        let mut state = TuiState::new();
        state.session.stage_file(StagedFile::new("/docs/a.pdf"));
        state.ingestion_pending = true;

        app.run_command(
            &mut state,
            SessionCommand::Add(vec![PathBuf::from("/docs/b.pdf")]),
        );

        // The in-flight batch is untouched and the user is told to wait
        assert_eq!(state.session.staged_files().len(), 1);
        assert_eq!(state.session.staged_files()[0].name, "a.pdf");
        assert!(state.flash_message.is_some());

        // Completion then clears exactly the batch that was submitted
        app.apply_backend_event(
            &mut state,
            BackendEvent::IngestionFinished(Ok(vec![DocumentInfo::new("a.pdf", 3)])),
        );
        assert!(state.session.staged_files().is_empty());
        assert_eq!(state.session.documents().len(), 1);
    }

    #[tokio::test]
    async fn test_question_not_duplicated_into_history_payload() {
        let mut app = app();
        let mut state = TuiState::new();
        state
            .session
            .complete_ingestion(vec![DocumentInfo::new("a.pdf", 3)], "openai")
            .unwrap();
        state.mode = InputMode::Insert;
        for c in "why?".chars() {
            state.insert_char(c);
        }

        app.submit_input(&mut state);
        // The user turn renders immediately
        assert_eq!(state.session.history().len(), 1);

        // but the backend sees the history from before the question
        match app.backend_rx.recv().await.unwrap() {
            BackendEvent::AnswerFinished { question, result } => {
                assert_eq!(question, "why?");
                assert_eq!(result.unwrap(), "echo: why? (history 0)");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_command_without_staged_files_flashes() {
        let mut app = app();
        let mut state = TuiState::new();
        app.run_command(&mut state, SessionCommand::Submit);
        assert!(!state.ingestion_pending);
        assert!(state.flash_message.is_some());
    }

    #[tokio::test]
    async fn test_model_command_updates_label() {
        let mut app = app();
        let mut state = TuiState::new();
        app.run_command(
            &mut state,
            SessionCommand::Model {
                provider: "ollama".into(),
                model: "llama3".into(),
            },
        );
        assert_eq!(state.session.model_label(), Some("ollama/llama3"));
    }

    #[tokio::test]
    async fn test_view_toggle_action() {
        let mut app = app();
        let mut state = TuiState::new();
        app.handle_action(&mut state, Action::ToggleView);
        assert_eq!(state.session.view(), ViewOption::Inspector);
    }
}
