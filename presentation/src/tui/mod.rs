//! TUI module for docchat
//!
//! Terminal front end built on ratatui. The session state record is the
//! single source of truth; every render pass derives a status badge and a
//! region plan from one snapshot and draws the widgets in a fixed order.

mod app;
mod branding;
mod command;
mod event;
pub mod gate;
mod layout;
mod mode;
mod render;
mod state;
pub mod status;
mod widgets;

pub use app::TuiApp;
pub use branding::Branding;
pub use command::{SessionCommand, parse_command};
pub use event::BackendEvent;
pub use gate::{ChatRegion, MainRegion, Region, RegionPlan};
pub use mode::{Action, InputMode, KeyHandler};
pub use state::{InspectionResult, TuiState};
pub use status::{StatusBadge, StatusLevel};
