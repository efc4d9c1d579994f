//! Sidebar widget: configuration and staging affordances
//!
//! Rendered unconditionally every pass: model/provider selection and file
//! staging are the only means of mutating state for the next pass. The
//! transcript-export affordance appears only when there is history.

use crate::tui::state::TuiState;
use docchat_application::ModelSelection;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SidebarWidget<'a> {
    state: &'a TuiState,
    selection: &'a ModelSelection,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(state: &'a TuiState, selection: &'a ModelSelection) -> Self {
        Self { state, selection }
    }
}

impl<'a> Widget for SidebarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Configuration", heading)),
            Line::from(vec![
                Span::raw("provider: "),
                Span::styled(
                    self.selection.provider.clone(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(vec![
                Span::raw("model:    "),
                Span::styled(
                    self.selection.model.clone(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(Span::styled(":model <provider> <model>", dim)),
            Line::from(""),
            Line::from(Span::styled("Staged files", heading)),
        ];

        let staged = self.state.session.staged_files();
        if staged.is_empty() {
            lines.push(Line::from(Span::styled("(none)", dim)));
        } else {
            for file in staged {
                lines.push(Line::from(format!("• {}", file.name)));
            }
        }
        lines.push(Line::from(Span::styled(":add <path>  :submit", dim)));

        if self.state.ingestion_pending {
            lines.push(Line::from(Span::styled(
                "ingesting…",
                Style::default().fg(Color::Yellow),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("view: "),
            Span::styled(
                self.state.session.view().label(),
                Style::default().fg(Color::White),
            ),
            Span::styled("  (v to switch)", dim),
        ]));

        if !self.state.session.history().is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                ":export — save transcript",
                Style::default().fg(Color::Green),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Sidebar ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
