//! Reaction endpoint: toggles the caller's emoji on a player's story.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};

use storyline_core::story::{Story, find_or_create_story, is_single_emoji};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /react.
#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    /// The reaction emoji. Must be exactly one emoji.
    pub emoji: String,
    /// Id of the player whose story is being reacted to.
    pub gamer: i64,
}

/// POST /react
#[instrument(skip(state, user, request), fields(gamer = request.gamer))]
async fn react(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<ReactRequest>,
) -> Result<Json<Story>, ApiError> {
    if !is_single_emoji(&request.emoji) {
        return Err(ApiError::InvalidEmoji);
    }

    let player = state
        .directory
        .fetch_player(&request.gamer.to_string())
        .await?;
    let Some(time) = player.story_time()? else {
        return Err(ApiError::NoStory);
    };

    let mut story = find_or_create_story(state.stories.as_ref(), player.id, time).await?;
    let added = story.toggle_reaction(&request.emoji, &user.0.name);
    state.stories.update_emotes(&story).await?;

    info!(player = player.id, emoji = %request.emoji, added, "toggled story reaction");

    Ok(Json(story))
}

/// Returns the reaction router.
pub fn router() -> Router<AppState> {
    Router::new().route("/react", post(react))
}
