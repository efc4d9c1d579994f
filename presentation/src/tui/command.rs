//! `:` command parsing

use docchat_domain::ViewOption;
use std::path::PathBuf;

/// A parsed `:` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Stage one or more file paths
    Add(Vec<PathBuf>),
    /// Submit the staged batch for ingestion
    Submit,
    /// Change the provider/model selection
    Model { provider: String, model: String },
    /// Switch the main view
    View(ViewOption),
    /// Export the transcript
    Export,
    /// Clear the chat history
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse a command-buffer string (without the leading `:`).
pub fn parse_command(input: &str) -> SessionCommand {
    let input = input.trim();
    if input.is_empty() {
        return SessionCommand::Empty;
    }
    let mut parts = input.split_whitespace();
    let head = parts.next().unwrap_or_default();

    match head {
        "add" | "a" => {
            let paths: Vec<PathBuf> = parts.map(PathBuf::from).collect();
            if paths.is_empty() {
                SessionCommand::Unknown("add requires at least one path".into())
            } else {
                SessionCommand::Add(paths)
            }
        }
        "submit" | "s" => SessionCommand::Submit,
        "model" | "m" => {
            let provider = parts.next();
            let model = parts.next();
            match (provider, model) {
                (Some(p), Some(m)) => SessionCommand::Model {
                    provider: p.to_string(),
                    model: m.to_string(),
                },
                _ => SessionCommand::Unknown("usage: model <provider> <model>".into()),
            }
        }
        "view" | "v" => match parts.next().map(str::parse::<ViewOption>) {
            Some(Ok(view)) => SessionCommand::View(view),
            _ => SessionCommand::Unknown("usage: view chat|inspector".into()),
        },
        "export" | "e" => SessionCommand::Export,
        "clear" => SessionCommand::Clear,
        "help" | "h" => SessionCommand::Help,
        "q" | "quit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(format!("unknown command: {other}")),
    }
}
