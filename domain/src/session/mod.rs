//! Session domain: state record and message entities

pub mod entities;
pub mod state;

pub use entities::{ChatMessage, Role};
pub use state::SessionState;
