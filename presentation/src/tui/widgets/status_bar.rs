//! Status bar widget: mode indicator + key hints + flash messages

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mode_span = Span::styled(format!(" {} ", mode_text), mode_style);

        // Flash message or key hints on the right
        let right_text: String = if let Some((flash, _)) = &self.state.flash_message {
            flash.clone()
        } else {
            match mode {
                InputMode::Normal => "i:input  ::command  v:view  j/k:scroll  ?:help  q:quit".into(),
                InputMode::Insert => "Enter:send  Esc:normal".into(),
                InputMode::Command => "Enter:execute  Esc:cancel  help:commands".into(),
            }
        };

        let right_line = Line::from(Span::styled(
            right_text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ));

        let mode_line = Line::from(vec![mode_span]);
        let mode_width = mode_text.len() as u16 + 2;
        buf.set_line(area.x, area.y, &mode_line, mode_width);

        // Display width, not byte length: flash text may contain multi-byte
        // glyphs and the block is right-aligned.
        let right_width = right_line.width() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            buf.set_line(right_x, area.y, &right_line, right_width);
        }
    }
}
