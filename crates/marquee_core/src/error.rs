//! Engine error types

use thiserror::Error;

/// Errors reported by an external engine collaborator
///
/// Missing page elements are never errors — lookups degrade to `None` and
/// the caller no-ops. These variants cover the engine itself being
/// unavailable or rejecting a declaration outright.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine has been shut down or dropped
    #[error("engine detached: {0}")]
    Detached(String),

    /// The engine rejected a declaration
    #[error("declaration rejected: {0}")]
    Rejected(String),

    /// Generic engine error
    #[error("engine error: {0}")]
    Other(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
