// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Missing required column '{column}' (available columns: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    ParseFailure { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IndexError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Short stable label used in terminal diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceNotFound { .. } => "source-not-found",
            Self::MissingColumn { .. } => "missing-column",
            Self::ParseFailure { .. } => "parse-failure",
            Self::Config(_) => "config",
            Self::Validation(_) => "validation",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }

    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. } | Self::MissingColumn { .. } | Self::ParseFailure { .. }
        )
    }
}
