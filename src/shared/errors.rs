//! Error handling for the application

use thiserror::Error;

/// Table configuration errors, raised once when a table is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column id: {0}")]
    DuplicateColumn(String),

    #[error("Table has no columns")]
    NoColumns,

    #[error("Page size must be positive, got {0}")]
    InvalidPageSize(usize),
}

/// Bookmark persistence errors
#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Failed to read bookmarks from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write bookmarks to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed bookmark file: {0}")]
    Malformed(String),
}

/// Snapshot data source errors
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Table error: {0}")]
    TableError(#[from] TableError),

    #[error("Bookmark error: {0}")]
    BookmarkError(#[from] BookmarkError),

    #[error("Data source error: {0}")]
    DataSourceError(#[from] DataSourceError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unknown(err.to_string())
    }
}
