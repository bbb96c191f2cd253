use thiserror::Error;

/// Error type for sqlrig operations
#[derive(Debug, Error)]
pub enum SqlRigError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Preparing statement failed: {0}")]
    PrepareFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Unknown prepared statement id: {0}")]
    UnknownStatement(u64),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result type alias for sqlrig operations
pub type Result<T> = std::result::Result<T, SqlRigError>;
