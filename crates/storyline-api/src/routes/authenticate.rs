//! Sign-in endpoint: exchanges a platform credential for a session token.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use storyline_core::player::SessionUser;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /authenticate.
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    /// Platform player name.
    pub name: String,
    /// Platform credential to verify upstream.
    pub token: String,
}

/// Response body carrying the freshly signed session token.
#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    /// HS256 session token.
    pub token: String,
}

/// POST /authenticate
#[instrument(skip(state, request), fields(name = %request.name))]
async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, ApiError> {
    let correct = state
        .directory
        .verify_credential(&request.name, &request.token)
        .await?;
    if !correct {
        return Err(ApiError::InvalidToken);
    }

    let player = state.directory.fetch_player(&request.name).await?;
    let user = SessionUser {
        sub: player.id,
        name: player.name,
    };
    let token = state.tokens.sign(&user, state.clock.now())?;

    info!(player = user.sub, "issued session token");

    Ok(Json(AuthenticateResponse { token }))
}

/// Returns the authentication router.
pub fn router() -> Router<AppState> {
    Router::new().route("/authenticate", post(authenticate))
}
