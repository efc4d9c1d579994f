//! Inspector widget: retrieval inspection results
//!
//! Entirely gated on readiness: when the session is not ready only a
//! locked placeholder renders, there is no read-only mode.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct InspectorWidget<'a> {
    state: &'a TuiState,
    /// Gate decision: false renders the locked placeholder.
    active: bool,
}

impl<'a> InspectorWidget<'a> {
    pub fn new(state: &'a TuiState, active: bool) -> Self {
        Self { state, active }
    }

    fn format_lines(&self) -> Vec<Line<'_>> {
        if !self.active {
            return vec![Line::from(Span::styled(
                "Inspector is locked until ingestion completes.",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        if self.state.inspection_pending {
            return vec![Line::from(Span::styled(
                "Retrieving…",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let Some(inspection) = &self.state.inspection else {
            return vec![Line::from(Span::styled(
                "Type a query (i) to see which chunks retrieval would feed the model.",
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Query: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(inspection.query.clone()),
            ]),
            Line::from(""),
        ];

        for chunk in &inspection.chunks {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", chunk.source),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("(score {:.2})", chunk.score),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for text_line in chunk.text.lines() {
                lines.push(Line::from(format!("  {}", text_line)));
            }
            lines.push(Line::from(""));
        }

        if inspection.chunks.is_empty() {
            lines.push(Line::from(Span::styled(
                "No chunks retrieved for this query.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }
}

impl<'a> Widget for InspectorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.active {
            Color::White
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Inspector ")
            .style(Style::default().fg(border_color));

        Paragraph::new(self.format_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
