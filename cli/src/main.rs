//! CLI entrypoint for docchat
//!
//! Wires the layers together: configuration, the HTTP RAG backend
//! adapter, the session controller, and the TUI.

use anyhow::{Context, Result};
use clap::Parser;
use docchat_application::{ModelSelection, SessionController};
use docchat_infrastructure::HttpRagBackend;
use docchat_presentation::{Branding, Cli, ConfigLoader, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Logs go to stderr so
    // they do not interleave with the alternate-screen TUI; redirect with
    // 2>docchat.log when debugging.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Configuration: defaults <- global <- project <- --config, then
    // command-line flags override individual fields.
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }
    if let Some(provider) = cli.provider {
        config.model.provider = provider;
    }
    if let Some(model) = cli.model {
        config.model.model = model;
    }
    if let Some(logo) = cli.logo {
        config.ui.logo_path = Some(logo);
    }
    if let Some(dir) = cli.export_dir {
        config.ui.export_dir = Some(dir);
    }

    info!(backend = %config.backend.url, "starting docchat");

    // === Dependency injection ===
    let backend = Arc::new(HttpRagBackend::new(config.backend.url.clone()));
    let selection = ModelSelection::new(config.model.provider.clone(), config.model.model.clone());
    let controller = SessionController::new(
        Arc::clone(&backend),
        Arc::clone(&backend),
        Arc::clone(&backend),
        selection,
    );

    let branding = Branding::load(config.ui.logo_path.as_deref());
    let export_dir = config.ui.export_dir.unwrap_or_else(|| PathBuf::from("."));

    let mut app =
        TuiApp::new(controller, branding, export_dir).with_initial_files(cli.files);
    app.run().await.context("TUI terminated with an error")?;

    Ok(())
}
