//! Error handling for the resume scorer
//!
//! Scoring itself is total and never fails; these errors only surface from
//! loading, storing, configuring and formatting.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resume parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScoreError>;

