//! Database error types.

use thiserror::Error;

/// Errors that can occur when using the database.
///
/// Every variant carries the underlying cause text so callers wrapping a
/// `DbError` never lose the original failure detail.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to open the database.
    #[error("failed to open database: {0}")]
    Open(String),

    /// Failed to execute a statement or query.
    #[error("query execution failed: {0}")]
    Query(String),

    /// Failed to deserialize a row.
    #[error("row deserialization failed: {0}")]
    Deserialize(String),

    /// No rows returned when one was expected.
    #[error("no rows returned")]
    NotFound,
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Deserialize(e.to_string())
    }
}
