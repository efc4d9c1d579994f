//! Input widget: question/query input with mode-aware prompt
//!
//! When the gate keeps input inactive (ingestion not complete) the
//! widget renders as a dimmed placeholder; the surrounding key handling
//! refuses Insert mode in that case, so this is display only.

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use docchat_domain::ViewOption;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
    /// Gate decision for the input sub-region this pass.
    input_allowed: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState, input_allowed: bool) -> Self {
        Self {
            state,
            input_allowed,
        }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view_prompt = match self.state.session.view() {
            ViewOption::Chat => "chat> ",
            ViewOption::Inspector => "inspect> ",
        };

        let (prompt, text, cursor_pos, color, active) = match self.state.mode {
            InputMode::Insert => (
                view_prompt,
                self.state.input.as_str(),
                self.state.cursor_pos,
                Color::Green,
                true,
            ),
            InputMode::Command => (
                ":",
                self.state.command_input.as_str(),
                self.state.command_cursor,
                Color::Yellow,
                true,
            ),
            InputMode::Normal => (
                view_prompt,
                self.state.input.as_str(),
                self.state.cursor_pos,
                Color::DarkGray,
                false,
            ),
        };

        let border_style = if active {
            Style::default().fg(color)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .style(border_style);

        // Gated off and not in command mode: inert placeholder only
        if !self.input_allowed && self.state.mode != InputMode::Command {
            let placeholder = Line::from(Span::styled(
                "waiting for ingestion — submit documents first",
                Style::default().fg(Color::DarkGray),
            ));
            Paragraph::new(placeholder).block(block).render(area, buf);
            return;
        }

        let prompt_span = Span::styled(
            prompt,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        let line = if active {
            let cursor_style = Style::default().fg(Color::Black).bg(color);
            let before = &text[..cursor_pos.min(text.len())];
            let after = &text[cursor_pos.min(text.len())..];

            let mut spans = vec![prompt_span, Span::raw(before.to_string())];
            if after.is_empty() {
                spans.push(Span::styled(" ", cursor_style));
            } else {
                let ch = after.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
                spans.push(Span::styled(after[..ch].to_string(), cursor_style));
                if ch < after.len() {
                    spans.push(Span::raw(after[ch..].to_string()));
                }
            }
            Line::from(spans)
        } else {
            Line::from(vec![
                prompt_span,
                Span::styled(text.to_string(), Style::default().fg(color)),
            ])
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
