//! Error types for jsondb
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using JsonDbError
pub type Result<T> = std::result::Result<T, JsonDbError>;

/// Unified error type for jsondb operations
#[derive(Debug, Error)]
pub enum JsonDbError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("missing collection")]
    MissingCollection,

    #[error("missing resource")]
    MissingResource,

    #[error("invalid {kind} name: {name:?}")]
    InvalidName { kind: &'static str, name: String },

    #[error("invalid document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("{}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to find resource {0}")]
    ResourceNotFound(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl JsonDbError {
    /// True for the validation class (rejected before any I/O)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            JsonDbError::MissingCollection
                | JsonDbError::MissingResource
                | JsonDbError::InvalidName { .. }
                | JsonDbError::InvalidDocument(_)
        )
    }

    /// True for the not-found class (target absent on disk)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            JsonDbError::NotFound { .. } | JsonDbError::ResourceNotFound(_)
        )
    }
}
