//! Configuration loader with multi-source merging

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// RAG backend service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the ingestion/query service
    pub url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
        }
    }
}

/// Default model selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Embedding/LLM provider ("openai", "ollama", ...)
    pub provider: String,
    /// Model name within the provider
    pub model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Path to the header logo mark asset (first non-blank line is used)
    pub logo_path: Option<PathBuf>,
    /// Directory transcripts are exported into (defaults to the cwd)
    pub export_dir: Option<PathBuf>,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend settings
    pub backend: BackendConfig,
    /// Model selection defaults
    pub model: ModelConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Configuration loader that merges multiple sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./docchat.toml` or `./.docchat.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/docchat/config.toml`
    /// 4. Fallback: `~/.config/docchat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<AppConfig, figment::Error> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            figment = figment.merge(Toml::file(&global_path).nested());
        }

        for filename in &["docchat.toml", ".docchat.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path).nested());
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path).nested());
        }

        figment.extract()
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> AppConfig {
        AppConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_path = config_dir.join("docchat").join("config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        // Return the expected path even if it doesn't exist yet
        dirs::config_dir().map(|d| d.join("docchat").join("config.toml"))
    }
}
