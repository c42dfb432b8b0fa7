//! Profile endpoint: upstream profile plus social state.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::{info, instrument};

use storyline_core::player::Player;
use storyline_core::story::{Story, find_or_create_story};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /profile/{user_id}.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The upstream profile document, passed through verbatim.
    pub gamer: Player,
    /// The active story's social state, when the player has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<Story>,
    /// The player's about-me blurb, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
}

/// GET /profile/{user_id}
///
/// `user_id` is forwarded to the upstream verbatim; the platform accepts
/// either a numeric id or a player name. When the player has an active
/// story its document is found-or-created; when not, any leftover story
/// documents for the player are deleted.
#[instrument(skip(state))]
async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let player = state.directory.fetch_player(&user_id).await?;

    let story = match player.story_time()? {
        Some(time) => Some(find_or_create_story(state.stories.as_ref(), player.id, time).await?),
        None => {
            let deleted = state.stories.delete_for_player(player.id).await?;
            if deleted > 0 {
                info!(player = player.id, deleted, "removed stale story documents");
            }
            None
        }
    };

    let about_me = state.about_me.find(player.id).await?;

    Ok(Json(ProfileResponse {
        gamer: player,
        story,
        about_me,
    }))
}

/// Returns the profile router.
pub fn router() -> Router<AppState> {
    Router::new().route("/profile/{user_id}", get(get_profile))
}
