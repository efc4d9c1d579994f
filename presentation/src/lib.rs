//! Presentation layer for docchat
//!
//! This crate contains the TUI view coordinator (status publisher, view
//! gate, render dispatcher, widgets), CLI definitions, and the
//! configuration loader.

pub mod cli;
pub mod config;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{AppConfig, ConfigLoader};
pub use tui::{Branding, TuiApp};
pub use tui::gate::{ChatRegion, MainRegion, Region, RegionPlan};
pub use tui::status::{StatusBadge, StatusLevel};
