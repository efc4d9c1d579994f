//! Banner rows: upload prompt and unsubmitted-changes warning
//!
//! Rendered above all content in gate order, so warnings always precede
//! the regions they refer to.

use crate::tui::gate::RegionPlan;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const UPLOAD_PROMPT: &str = "▸ Stage and submit PDFs to start chatting (:add <path>, then :submit)";
const UNSUBMITTED_WARNING: &str = "▸ New PDFs staged. Submit before chatting (:submit)";

pub struct BannerWidget<'a> {
    plan: &'a RegionPlan,
}

impl<'a> BannerWidget<'a> {
    pub fn new(plan: &'a RegionPlan) -> Self {
        Self { plan }
    }
}

impl<'a> Widget for BannerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        if self.plan.upload_prompt {
            lines.push(Line::from(Span::styled(
                UPLOAD_PROMPT,
                Style::default().fg(Color::Cyan),
            )));
        }
        if self.plan.unsubmitted_warning {
            lines.push(Line::from(Span::styled(
                UNSUBMITTED_WARNING,
                Style::default().fg(Color::Yellow),
            )));
        }
        Paragraph::new(lines).render(area, buf);
    }
}
