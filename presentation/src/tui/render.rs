//! Render dispatcher: one pass over one consistent snapshot
//!
//! Reads the session snapshot once, derives the status badge and region
//! plan, and issues widget renders in the fixed order: header, banners,
//! file list, main region, sidebar, input, status bar. All state
//! mutation happens between passes; nothing here writes.

use super::branding::Branding;
use super::gate::{MainRegion, RegionPlan};
use super::layout::MainLayout;
use super::state::TuiState;
use super::status::StatusBadge;
use super::widgets::{
    BannerWidget, ConversationWidget, FileListWidget, HeaderWidget, InputWidget, InspectorWidget,
    SidebarWidget, StatusBarWidget,
};
use docchat_application::ModelSelection;

pub(super) fn render(
    frame: &mut ratatui::Frame,
    state: &TuiState,
    branding: &Branding,
    selection: &ModelSelection,
) {
    let session = &state.session;
    let plan = RegionPlan::decide(session);
    let badge = StatusBadge::publish(session.chat_ready(), session.model_label());
    let layout = MainLayout::compute(frame.area(), &plan, session.documents().len());

    // Fixed chrome
    frame.render_widget(HeaderWidget::new(branding, &badge), layout.header);

    // Gate order: prompt/warning banners precede all content
    if let Some(area) = layout.banners {
        frame.render_widget(BannerWidget::new(&plan), area);
    }
    if let Some(area) = layout.file_list {
        frame.render_widget(FileListWidget::new(session.documents()), area);
    }

    // Main region: exactly one of the two views per pass
    match plan.main {
        MainRegion::Chat(chat) => {
            frame.render_widget(ConversationWidget::new(state, chat.transcript), layout.content);
        }
        MainRegion::Inspector { active } => {
            frame.render_widget(InspectorWidget::new(state, active), layout.content);
        }
    }

    // Mutation affordances render unconditionally
    frame.render_widget(SidebarWidget::new(state, selection), layout.sidebar);

    let input_allowed = plan.chat_input_active() || plan.inspector_active();
    frame.render_widget(InputWidget::new(state, input_allowed), layout.input);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    if state.show_help {
        let help_area = MainLayout::centered_overlay(70, 70, frame.area());
        frame.render_widget(ratatui::widgets::Clear, help_area);
        render_help(frame, help_area);
    }
}

fn render_help(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Normal Mode:"),
        Line::from("  i      Enter Insert mode (question / inspector query)"),
        Line::from("  :      Enter Command mode"),
        Line::from("  v/Tab  Switch Chat / Inspector"),
        Line::from("  j/k    Scroll down/up"),
        Line::from("  ?      Toggle this help"),
        Line::from("  q      Quit"),
        Line::from(""),
        Line::from("Insert Mode:"),
        Line::from("  Enter  Send"),
        Line::from("  Esc    Return to Normal"),
        Line::from(""),
        Line::from("Commands (:command):"),
        Line::from("  :add <path>...            Stage PDFs"),
        Line::from("  :submit                   Ingest the staged batch"),
        Line::from("  :model <provider> <model> Change selection"),
        Line::from("  :view chat|inspector      Switch view"),
        Line::from("  :export                   Save transcript as JSON"),
        Line::from("  :clear                    Clear chat history"),
        Line::from("  :q                        Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
