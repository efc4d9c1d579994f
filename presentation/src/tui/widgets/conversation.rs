//! Conversation widget: chat transcript with scroll

use crate::tui::state::TuiState;
use docchat_domain::Role;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

fn role_color(role: Role) -> Color {
    match role {
        Role::User => Color::Cyan,
        Role::Assistant => Color::Green,
        Role::System => Color::Yellow,
    }
}

pub struct ConversationWidget<'a> {
    state: &'a TuiState,
    /// Whether the transcript sub-region is active (gate decision).
    transcript: bool,
}

impl<'a> ConversationWidget<'a> {
    pub fn new(state: &'a TuiState, transcript: bool) -> Self {
        Self { state, transcript }
    }

    fn format_messages(&self) -> Text<'_> {
        let mut lines: Vec<Line> = Vec::new();

        if self.transcript {
            for msg in self.state.session.history() {
                let role_style = Style::default()
                    .fg(role_color(msg.role))
                    .add_modifier(Modifier::BOLD);

                lines.push(Line::from(Span::styled(
                    format!("{}: ", msg.role.label()),
                    role_style,
                )));
                for content_line in msg.content.lines() {
                    lines.push(Line::from(format!("  {}", content_line)));
                }
                lines.push(Line::from(""));
            }
        }

        if self.state.answer_pending {
            lines.push(Line::from(Span::styled(
                "Assistant is thinking…",
                Style::default().fg(Color::DarkGray),
            )));
        } else if !self.transcript {
            lines.push(Line::from(Span::styled(
                "No messages yet. Ask a question once the corpus is ready.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Text::from(lines)
    }
}

/// Top-line scroll for a transcript of `total_lines` wrapped lines.
/// `offset` counts lines up from the bottom; 0 pins the view to the newest
/// message. Counts beyond the u16 range saturate instead of wrapping.
fn scroll_for(total_lines: usize, visible_height: u16, offset: usize) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    if total > visible_height {
        let max_scroll = total - visible_height;
        let offset = u16::try_from(offset).unwrap_or(u16::MAX).min(max_scroll);
        max_scroll - offset
    } else {
        0
    }
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.format_messages();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2);

        // Paragraph's own line_count matches the wrapping used at render
        // time, so the scroll math stays consistent.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width);
        let scroll = scroll_for(total_lines, visible_height, self.state.scroll_offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Chat ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_pins_bottom() {
        assert_eq!(scroll_for(10, 4, 0), 6);
        assert_eq!(scroll_for(3, 4, 0), 0);
    }

    #[test]
    fn test_offset_capped_at_top() {
        assert_eq!(scroll_for(10, 4, 100), 0);
        assert_eq!(scroll_for(10, 4, 2), 4);
    }

    #[test]
    fn test_huge_transcripts_saturate() {
        // Counts past the u16 range clamp to the deepest reachable scroll
        assert_eq!(scroll_for(70_000, 40, 0), u16::MAX - 40);
        assert_eq!(scroll_for(usize::MAX, 40, usize::MAX), 0);
    }
}
