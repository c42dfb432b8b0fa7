//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The upstream platform API failed or returned an unusable response.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// A persistence error from the document store.
    #[error("storage error: {0}")]
    Storage(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}
