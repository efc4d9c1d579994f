//! File list panel: ingested documents and their chunk counts

use docchat_domain::DocumentInfo;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct FileListWidget<'a> {
    documents: &'a [DocumentInfo],
}

impl<'a> FileListWidget<'a> {
    pub fn new(documents: &'a [DocumentInfo]) -> Self {
        Self { documents }
    }
}

impl<'a> Widget for FileListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .documents
            .iter()
            .map(|doc| {
                Line::from(vec![
                    Span::styled("▪ ", Style::default().fg(Color::Green)),
                    Span::raw(doc.name.clone()),
                    Span::styled(
                        format!("  ({} chunks)", doc.chunk_count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Documents ({}) ", self.documents.len()))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
