//! Error types for the data-model entity layer

use thiserror::Error;

/// Core error type for entity operations
#[derive(Error, Debug)]
pub enum DataModelError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataModelError {
    pub fn not_found(kind: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type alias for entity operations
pub type Result<T> = std::result::Result<T, DataModelError>;
