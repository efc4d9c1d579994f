//! TUI widgets: one per renderable region

pub mod banners;
pub mod conversation;
pub mod file_list;
pub mod header;
pub mod input;
pub mod inspector;
pub mod sidebar;
pub mod status_bar;

pub use banners::BannerWidget;
pub use conversation::ConversationWidget;
pub use file_list::FileListWidget;
pub use header::HeaderWidget;
pub use input::InputWidget;
pub use inspector::InspectorWidget;
pub use sidebar::SidebarWidget;
pub use status_bar::StatusBarWidget;
