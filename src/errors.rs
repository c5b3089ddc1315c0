// ABOUTME: Error types for the break-slides application
// ABOUTME: Provides structured error handling for loading, layout, writing and rendering

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreakError {
    #[error("Failed to read or write file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse CSV file {path:?}: {source}")]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV file {path:?} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid record in {path:?} at row {row}: {message}")]
    InvalidRecord {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{tool} failed: {message}")]
    RenderError { tool: String, message: String },
}

impl BreakError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        BreakError::CsvError {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BreakError>;
