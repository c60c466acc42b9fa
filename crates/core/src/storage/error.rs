use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors that can occur while talking to the object storage service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Invalid presigning configuration: {0}")]
    InvalidConfig(String),
    #[error("Presigning failed: {0}")]
    PresignFailed(String),
}

/// Result type for object storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
