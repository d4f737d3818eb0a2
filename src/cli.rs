//! CLI interface for the resume scorer

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-score")]
#[command(about = "Deterministic resume quality scoring and export")]
#[command(long_about = "Score a resume against a fixed completeness rule set, get the top improvements, check bullet discipline and export plain text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume file (JSON or TOML)
    Score {
        /// Path to resume file
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Show bullet guidance for every flagged line
        #[arg(short, long)]
        detailed: bool,

        /// Skip bullet guidance
        #[arg(long)]
        no_bullets: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Check bullet discipline for a description
    Bullets {
        /// Description text, or a path when --file is set
        input: String,

        /// Treat the input as a path to a text file
        #[arg(short, long)]
        file: bool,
    },

    /// Export a resume as plain text
    Export {
        /// Path to resume file
        resume: PathBuf,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print the built-in sample resume as JSON
    Sample {
        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Manage locally stored resumes
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum StoreAction {
    /// Store a resume file under a key
    Save {
        /// Resume file to store
        resume: PathBuf,

        /// Storage key (defaults to the configured key)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Print a stored resume as JSON
    Load {
        /// Storage key (defaults to the configured key)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// List stored keys
    List,

    /// Remove a stored resume
    Remove {
        /// Storage key
        key: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
