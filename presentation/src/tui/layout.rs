//! Screen layout: region plan + frame area → widget rectangles
//!
//! Pure geometry: the gate decides *what* renders, this module decides
//! *where*. Banner and file-list rows only exist when the plan activates
//! them, so inactive regions cost no screen space.

use super::gate::RegionPlan;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved areas for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    /// Upload prompt and/or unsubmitted warning rows, top to bottom in
    /// gate order. `None` when neither banner is active.
    pub banners: Option<Rect>,
    /// Ingested-documents panel. `None` unless the gate activates it.
    pub file_list: Option<Rect>,
    /// Chat transcript or inspector, depending on the selected view.
    pub content: Rect,
    /// Model selection + staging affordances (always rendered).
    pub sidebar: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute all areas for the frame.
    pub fn compute(area: Rect, plan: &RegionPlan, document_count: usize) -> Self {
        let banner_rows = plan.upload_prompt as u16 + plan.unsubmitted_warning as u16;

        let mut constraints = vec![Constraint::Length(3)];
        if banner_rows > 0 {
            constraints.push(Constraint::Length(banner_rows));
        }
        constraints.push(Constraint::Min(5));
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut idx = 0;
        let header = rows[idx];
        idx += 1;
        let banners = if banner_rows > 0 {
            let r = rows[idx];
            idx += 1;
            Some(r)
        } else {
            None
        };
        let body = rows[idx];
        let input = rows[idx + 1];
        let status_bar = rows[idx + 2];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(body);
        let main_column = columns[0];
        let sidebar = columns[1];

        let (file_list, content) = if plan.file_list {
            // Panel height: one row per document + borders, capped
            let height = (document_count as u16 + 2).min(8);
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(height), Constraint::Min(3)])
                .split(main_column);
            (Some(parts[0]), parts[1])
        } else {
            (None, main_column)
        };

        Self {
            header,
            banners,
            file_list,
            content,
            sidebar,
            input,
            status_bar,
        }
    }

    /// Centered overlay area (percent of the frame), for the help modal.
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1]);

        horizontal[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::gate::RegionPlan;
    use docchat_domain::{DocumentInfo, SessionState, StagedFile};

    fn frame() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_fresh_session_layout() {
        let state = SessionState::new();
        let plan = RegionPlan::decide(&state);
        let layout = MainLayout::compute(frame(), &plan, 0);

        assert_eq!(layout.header.height, 3);
        // Upload prompt banner occupies one row
        assert_eq!(layout.banners.unwrap().height, 1);
        assert!(layout.file_list.is_none());
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
    }

    #[test]
    fn test_no_banner_rows_when_nothing_to_warn() {
        let mut state = SessionState::new();
        state.stage_file(StagedFile::new("/docs/a.pdf"));
        // staged non-empty so no upload prompt; warning is active though
        let plan = RegionPlan::decide(&state);
        let layout = MainLayout::compute(frame(), &plan, 0);
        assert_eq!(layout.banners.unwrap().height, 1);
    }

    #[test]
    fn test_both_banners_stack() {
        // Warning flag set while staged reads empty (stale batch after an
        // external rotation) makes both banners active at once.
        let mut state = SessionState::new();
        state.stage_file(StagedFile::new("/docs/a.pdf"));
        let plan_staged = RegionPlan::decide(&state);
        assert!(!plan_staged.upload_prompt);

        let plan = RegionPlan {
            upload_prompt: true,
            ..plan_staged
        };
        let layout = MainLayout::compute(frame(), &plan, 0);
        assert_eq!(layout.banners.unwrap().height, 2);
    }

    #[test]
    fn test_file_list_panel_sized_by_documents() {
        let mut state = SessionState::new();
        state
            .complete_ingestion(
                vec![
                    DocumentInfo::new("a.pdf", 4),
                    DocumentInfo::new("b.pdf", 9),
                ],
                "openai",
            )
            .unwrap();
        let plan = RegionPlan::decide(&state);
        let layout = MainLayout::compute(frame(), &plan, state.documents().len());

        let file_list = layout.file_list.unwrap();
        assert_eq!(file_list.height, 4); // 2 docs + borders

        // Capped for large corpora
        let layout = MainLayout::compute(frame(), &plan, 40);
        assert_eq!(layout.file_list.unwrap().height, 8);
    }

    #[test]
    fn test_columns_split_main_and_sidebar() {
        let state = SessionState::new();
        let plan = RegionPlan::decide(&state);
        let layout = MainLayout::compute(frame(), &plan, 0);

        assert!(layout.sidebar.width < layout.content.width);
        assert_eq!(layout.content.width + layout.sidebar.width, 80);
        assert_eq!(layout.content.y, layout.sidebar.y);
    }

    #[test]
    fn test_centered_overlay_is_inside_frame() {
        let overlay = MainLayout::centered_overlay(70, 70, frame());
        assert!(overlay.x > 0);
        assert!(overlay.y > 0);
        assert!(overlay.right() <= 80);
        assert!(overlay.bottom() <= 24);
    }
}
