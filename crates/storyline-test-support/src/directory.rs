//! Test player directory — stub and failing `PlayerDirectory`
//! implementations, plus player fixtures.

use async_trait::async_trait;

use storyline_core::directory::PlayerDirectory;
use storyline_core::error::DomainError;
use storyline_core::player::{Player, StoryStatus};

/// Builds a player profile fixture with an active story.
#[must_use]
pub fn player_with_story(id: i64, name: &str, post_time: i64) -> Player {
    Player {
        id,
        name: name.to_string(),
        story: StoryStatus {
            has_story: true,
            post_time: Some(post_time),
            extra: serde_json::Map::new(),
        },
        extra: serde_json::Map::new(),
    }
}

/// Builds a player profile fixture without a story.
#[must_use]
pub fn player_without_story(id: i64, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        story: StoryStatus::default(),
        extra: serde_json::Map::new(),
    }
}

/// A directory serving a fixed set of players. Credential checks succeed
/// unless configured otherwise; lookups match either the player id or the
/// player name.
#[derive(Debug, Default)]
pub struct StubPlayerDirectory {
    players: Vec<Player>,
    reject_credentials: bool,
}

impl StubPlayerDirectory {
    /// Creates an empty directory that accepts any credential.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player to the directory.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Makes every credential check fail.
    #[must_use]
    pub fn rejecting_credentials(mut self) -> Self {
        self.reject_credentials = true;
        self
    }
}

#[async_trait]
impl PlayerDirectory for StubPlayerDirectory {
    async fn verify_credential(&self, _name: &str, _token: &str) -> Result<bool, DomainError> {
        Ok(!self.reject_credentials)
    }

    async fn fetch_player(&self, key: &str) -> Result<Player, DomainError> {
        self.players
            .iter()
            .find(|player| player.id.to_string() == key || player.name == key)
            .cloned()
            .ok_or_else(|| DomainError::Upstream(format!("unknown player: {key}")))
    }
}

/// A directory whose every call fails, as if the upstream were down.
#[derive(Debug, Default)]
pub struct FailingPlayerDirectory;

#[async_trait]
impl PlayerDirectory for FailingPlayerDirectory {
    async fn verify_credential(&self, _name: &str, _token: &str) -> Result<bool, DomainError> {
        Err(DomainError::Upstream("simulated upstream outage".to_string()))
    }

    async fn fetch_player(&self, _key: &str) -> Result<Player, DomainError> {
        Err(DomainError::Upstream("simulated upstream outage".to_string()))
    }
}
