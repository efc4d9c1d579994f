//! TUI mode system (vim-like mode switching)
//!
//! - Normal mode: navigation and shortcuts
//! - Insert mode: question/query input
//! - Command mode: `:` commands (stage, submit, model, view, export)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl InputMode {
    /// Mode indicator string for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }

    /// Mode color for the status bar
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
            Self::Command => Color::Yellow,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EnterInsert,
    EnterCommand,
    ExitToNormal,
    /// Submit current input (Enter in Insert/Command mode)
    Submit,
    Cancel,
    Quit,
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    ScrollUp,
    ScrollDown,
    /// Toggle between Chat and Inspector views
    ToggleView,
    ShowHelp,
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(mode: InputMode, key: KeyEvent) -> Action {
        match mode {
            InputMode::Normal => Self::handle_normal(key),
            InputMode::Insert => Self::handle_insert(key),
            InputMode::Command => Self::handle_command(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            // Mode switches
            (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EnterInsert,
            (KeyCode::Char(':'), KeyModifiers::NONE) => Action::EnterCommand,

            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

            // Navigation
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,

            // View switch
            (KeyCode::Char('v'), KeyModifiers::NONE) | (KeyCode::Tab, _) => Action::ToggleView,

            // Help
            (KeyCode::Char('?'), KeyModifiers::NONE) => Action::ShowHelp,

            _ => Action::None,
        }
    }

    fn handle_insert(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ExitToNormal,
            KeyCode::Enter => Action::Submit,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            _ => Action::None,
        }
    }

    fn handle_command(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Enter => Action::Submit,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            _ => Action::None,
        }
    }
}
