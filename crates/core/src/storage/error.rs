use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Each variant carries the backend's own message. The variants classify the
/// failure; they never retry or recover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Decode error: {0}")]
    Decode(String),
}

impl RepositoryError {
    /// Returns true if the backend could not be reached at all.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, RepositoryError::ConnectionFailed(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
