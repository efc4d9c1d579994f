//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for docchat
#[derive(Parser, Debug)]
#[command(name = "docchat")]
#[command(author, version, about = "Chat with your PDF documents over a RAG backend")]
#[command(long_about = r#"
DocChat is a terminal front end for a retrieval-augmented PDF assistant.

Stage PDF files, submit them for ingestion, then ask questions against the
ingested corpus. An inspector view shows the raw retrieved chunks for a
query without running the language model.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./docchat.toml      Project-level config
3. ~/.config/docchat/config.toml   Global config

Example:
  docchat
  docchat --backend-url http://rag.internal:9000
  docchat --provider ollama --model llama3 report.pdf appendix.pdf
"#)]
pub struct Cli {
    /// PDF files to stage at startup (submit with :submit)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Base URL of the RAG backend service
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Embedding/LLM provider (e.g. openai, ollama)
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model name within the provider
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Path to a logo mark asset for the header
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Directory to write transcript exports into
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
