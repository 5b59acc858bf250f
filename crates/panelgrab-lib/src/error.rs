use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelgrabError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to parse manifest: {reason}")]
    Parse { reason: String },

    #[error("Failed to create directory {path}: {reason}")]
    Directory { path: PathBuf, reason: String },

    #[error("Output path {path} exists but is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to save {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Failed to write run report to {path}: {reason}")]
    ReportWrite { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("{failed} of {total} downloads failed")]
    DownloadsFailed { failed: usize, total: usize },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
