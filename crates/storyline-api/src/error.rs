//! Storyline API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use storyline_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request-level errors, mapped onto HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream rejected the platform credential at sign-in.
    #[error("invalid platform credential")]
    InvalidToken,

    /// The bearer session token is missing, malformed, or expired.
    #[error("missing or invalid session token")]
    InvalidSession,

    /// The reaction payload is not a single emoji.
    #[error("reaction must be a single emoji")]
    InvalidEmoji,

    /// The target player has no active story to react to.
    #[error("player has no active story")]
    NoStory,

    /// Signing a fresh session token failed.
    #[error("failed to issue session token")]
    TokenIssuance,

    /// A domain-level failure (upstream, storage, validation).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            Self::InvalidSession => (StatusCode::UNAUTHORIZED, "invalid_session"),
            Self::InvalidEmoji => (StatusCode::BAD_REQUEST, "invalid_emoji"),
            Self::NoStory => (StatusCode::EXPECTATION_FAILED, "no_story"),
            Self::TokenIssuance => (StatusCode::INTERNAL_SERVER_ERROR, "token_error"),
            Self::Domain(DomainError::Upstream(_)) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            Self::Domain(DomainError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
            }
            Self::Domain(DomainError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
