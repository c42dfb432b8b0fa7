//! About-me endpoint: stores the caller's profile blurb.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /about.
#[derive(Debug, Deserialize)]
pub struct AboutMeRequest {
    /// Free-text blurb to store for the caller.
    pub content: String,
}

/// POST /about
#[instrument(skip(state, user, request))]
async fn set_about_me(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<AboutMeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.about_me.upsert(user.0.sub, &request.content).await?;

    info!(player = user.0.sub, "stored about-me blurb");

    Ok(Json(serde_json::json!({})))
}

/// Returns the about-me router.
pub fn router() -> Router<AppState> {
    Router::new().route("/about", post(set_about_me))
}
