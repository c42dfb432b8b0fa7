//! Typed views of upstream platform data.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A player profile as reported by the upstream platform API.
///
/// Only the fields the service acts on are typed; everything else the
/// upstream sends — at the top level and inside `story` — is captured in
/// the `extra` maps and echoed back unchanged in the profile response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Platform-wide numeric player id.
    pub id: i64,
    /// Display name, also used as the reactor key in story documents.
    pub name: String,
    /// Current story state for this player.
    #[serde(default)]
    pub story: StoryStatus,
    /// Passthrough fields from the upstream profile document.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Player {
    /// Returns the post time of the player's active story, or `None` when
    /// no story is up.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Upstream` when the profile claims an active
    /// story but carries no post time; acting on that state would mean
    /// keying a story document off a timestamp that does not exist.
    pub fn story_time(&self) -> Result<Option<i64>, DomainError> {
        if !self.story.has_story {
            return Ok(None);
        }
        match self.story.post_time {
            Some(time) => Ok(Some(time)),
            None => Err(DomainError::Upstream(
                "profile reports an active story without a post time".to_string(),
            )),
        }
    }
}

/// Story state embedded in the upstream profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoryStatus {
    /// Whether the player currently has a story posted.
    #[serde(default)]
    pub has_story: bool,
    /// Unix timestamp of the active story's post, when `has_story` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_time: Option<i64>,
    /// Passthrough fields the upstream nests inside `story`.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Identity carried in a signed session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Player id (`sub` claim).
    pub sub: i64,
    /// Player name at sign-in time.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_deserializes_with_passthrough_fields() {
        let json = serde_json::json!({
            "id": 42,
            "name": "nonaf",
            "story": { "has_story": true, "post_time": 1_700_000_000 },
            "rank": "admin",
            "xp": 9001,
        });

        let player: Player = serde_json::from_value(json).unwrap();

        assert_eq!(player.id, 42);
        assert_eq!(player.name, "nonaf");
        assert_eq!(player.story_time().unwrap(), Some(1_700_000_000));
        assert_eq!(player.extra["rank"], "admin");
        assert_eq!(player.extra["xp"], 9001);
    }

    #[test]
    fn test_passthrough_fields_survive_a_round_trip() {
        let json = serde_json::json!({
            "id": 7,
            "name": "joa",
            "story": { "has_story": false },
            "country": "NL",
        });

        let player: Player = serde_json::from_value(json.clone()).unwrap();
        let back = serde_json::to_value(&player).unwrap();

        assert_eq!(back["country"], "NL");
        assert_eq!(back["name"], "joa");
    }

    #[test]
    fn test_fields_nested_inside_story_survive_a_round_trip() {
        let json = serde_json::json!({
            "id": 7,
            "name": "joa",
            "story": { "has_story": true, "post_time": 100, "views": 17 },
        });

        let player: Player = serde_json::from_value(json).unwrap();
        let back = serde_json::to_value(&player).unwrap();

        assert_eq!(back["story"]["views"], 17);
        assert_eq!(back["story"]["post_time"], 100);
    }

    #[test]
    fn test_no_story_time_when_has_story_is_false() {
        let player = Player {
            id: 1,
            name: "x".to_string(),
            story: StoryStatus {
                has_story: false,
                post_time: Some(123),
                extra: serde_json::Map::new(),
            },
            extra: serde_json::Map::new(),
        };

        assert_eq!(player.story_time().unwrap(), None);
    }

    #[test]
    fn test_active_story_without_post_time_is_an_upstream_error() {
        let player = Player {
            id: 1,
            name: "x".to_string(),
            story: StoryStatus {
                has_story: true,
                post_time: None,
                extra: serde_json::Map::new(),
            },
            extra: serde_json::Map::new(),
        };

        let err = player.story_time().unwrap_err();

        assert!(matches!(err, DomainError::Upstream(_)));
    }

    #[test]
    fn test_story_status_defaults_when_missing() {
        let json = serde_json::json!({ "id": 3, "name": "bee" });

        let player: Player = serde_json::from_value(json).unwrap();

        assert!(!player.story.has_story);
        assert_eq!(player.story.post_time, None);
    }
}
