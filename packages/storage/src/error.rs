// ABOUTME: Storage error types
// ABOUTME: Failures surfaced by the database layer to its callers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate {0}")]
    Duplicate(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
