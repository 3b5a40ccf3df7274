//! Error types for Curator core

use thiserror::Error;

/// Main error type for distributor operations
///
/// The four contract variants (`Config`, `Connection`, `NotInitialized`,
/// `Distribution`) display their message verbatim so hosts can surface them
/// unchanged.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Required configuration keys absent or empty
    #[error("{0}")]
    Config(String),

    /// Reachability probe against the remote store failed
    #[error("{0}")]
    Connection(String),

    /// Operation invoked before a successful initialize
    #[error("{0}")]
    NotInitialized(String),

    /// Remote write failed during distribution
    #[error("{0}")]
    Distribution(String),

    /// Plugin validation error
    #[error("{0}")]
    Validation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using CuratorError
pub type Result<T> = std::result::Result<T, CuratorError>;

impl CuratorError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        CuratorError::Config(msg.into())
    }

    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        CuratorError::Connection(msg.into())
    }

    /// Create a not-initialized error
    pub fn not_initialized(msg: impl Into<String>) -> Self {
        CuratorError::NotInitialized(msg.into())
    }

    /// Create a distribution error
    pub fn distribution(msg: impl Into<String>) -> Self {
        CuratorError::Distribution(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        CuratorError::Validation(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        CuratorError::Other(msg.into())
    }
}
