//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use storyline_core::player::SessionUser;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for the authenticated session identity.
///
/// Reads the `Authorization: Bearer <token>` header and verifies the token
/// against the configured secret. Handlers taking this extractor reject
/// unauthenticated requests with `401 invalid_session`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::InvalidSession)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::InvalidSession)?;
        let user = state.tokens.verify(token)?;
        Ok(Self(user))
    }
}
