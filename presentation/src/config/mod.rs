//! Presentation-level configuration

mod loader;

pub use loader::{AppConfig, BackendConfig, ConfigLoader, ModelConfig, UiConfig};
