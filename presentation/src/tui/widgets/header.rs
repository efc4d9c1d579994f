//! Header widget: branding mark, model label, and readiness badge

use crate::tui::branding::Branding;
use crate::tui::status::StatusBadge;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    branding: &'a Branding,
    badge: &'a StatusBadge,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(branding: &'a Branding, badge: &'a StatusBadge) -> Self {
        Self { branding, badge }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_color = self.badge.level.color();

        let line = Line::from(vec![
            Span::styled(
                self.branding.mark().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                self.badge.model_label.clone(),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(
                self.badge.text,
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" DocChat — RAG PDF assistant ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
