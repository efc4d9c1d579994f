//! TUI application state
//!
//! Wraps the domain `SessionState` (what the coordinator decides on) with
//! view-only concerns: input buffers, scroll, flash messages, pending
//! backend work. Backend events and key handling mutate this between
//! render passes; rendering reads one snapshot per pass.

use super::mode::InputMode;
use docchat_application::RetrievedChunk;
use docchat_domain::SessionState;

/// Result of the latest inspector query.
#[derive(Debug, Clone)]
pub struct InspectionResult {
    pub query: String,
    pub chunks: Vec<RetrievedChunk>,
}

/// Central TUI state: owned by the TuiApp select! loop
pub struct TuiState {
    // -- Session state record (what the gate and publisher read) --
    pub session: SessionState,

    // -- Mode --
    pub mode: InputMode,

    // -- Input buffer (Insert mode) --
    pub input: String,
    pub cursor_pos: usize,

    // -- Command buffer (for : mode) --
    pub command_input: String,
    pub command_cursor: usize,

    // -- Transcript scroll --
    pub scroll_offset: usize,
    pub auto_scroll: bool,

    // -- Pending backend work (one at a time each) --
    pub ingestion_pending: bool,
    pub answer_pending: bool,
    pub inspection_pending: bool,

    // -- Inspector --
    pub inspection: Option<InspectionResult>,

    // -- Overlay --
    pub show_help: bool,
    pub flash_message: Option<(String, std::time::Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            session: SessionState::new(),
            mode: InputMode::default(),
            input: String::new(),
            cursor_pos: 0,
            command_input: String::new(),
            command_cursor: 0,
            scroll_offset: 0,
            auto_scroll: true,
            ingestion_pending: false,
            answer_pending: false,
            inspection_pending: false,
            inspection: None,
            show_help: false,
            flash_message: None,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let len = self.active_input().len();
        if cursor < len {
            let input = self.active_input();
            let next_char_len = input[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            *self.active_cursor_mut() += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    /// Take the current input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Take the command buffer contents and clear it
    pub fn take_command(&mut self) -> String {
        self.command_cursor = 0;
        std::mem::take(&mut self.command_input)
    }

    // -- Active buffer helpers (routes to input or command based on mode) --

    fn active_input(&self) -> &str {
        match self.mode {
            InputMode::Command => &self.command_input,
            _ => &self.input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::Command => &mut self.command_input,
            _ => &mut self.input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            InputMode::Command => self.command_cursor,
            _ => self.cursor_pos,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            InputMode::Command => &mut self.command_cursor,
            _ => &mut self.cursor_pos,
        }
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset = self.scroll_offset.saturating_sub(1);
        } else {
            self.auto_scroll = true;
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), std::time::Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: std::time::Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}
