use std::path::PathBuf;

use thiserror::Error;

/// Failures of the individual store operations.
///
/// Every variant carries the engine error that caused it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to create schema: {0}")]
    Schema(#[source] rusqlite::Error),
    #[error("failed to insert record: {0}")]
    Insert(#[source] rusqlite::Error),
    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),
    #[error("update failed: {0}")]
    Update(#[source] rusqlite::Error),
    #[error("delete failed: {0}")]
    Delete(#[source] rusqlite::Error),
    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}

impl StoreError {
    /// Short name of the step that failed, used as a log field.
    pub fn step(&self) -> &'static str {
        match self {
            StoreError::Open { .. } => "open",
            StoreError::Schema(_) => "schema",
            StoreError::Insert(_) => "insert",
            StoreError::Query(_) => "query",
            StoreError::Update(_) => "update",
            StoreError::Delete(_) => "delete",
            StoreError::Close(_) => "close",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
