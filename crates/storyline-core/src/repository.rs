//! Document repository abstractions.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::story::Story;

/// Repository for story documents, keyed by `(player, time)`.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Load the story document for the given composite key.
    async fn find(&self, player: i64, time: i64) -> Result<Option<Story>, DomainError>;

    /// Insert a fresh story document.
    async fn insert(&self, story: &Story) -> Result<(), DomainError>;

    /// Persist the reaction map of an existing story document.
    async fn update_emotes(&self, story: &Story) -> Result<(), DomainError>;

    /// Delete every story document belonging to a player. Returns the
    /// number of documents removed.
    async fn delete_for_player(&self, player: i64) -> Result<u64, DomainError>;
}

/// Repository for per-player about-me blurbs.
#[async_trait]
pub trait AboutMeRepository: Send + Sync {
    /// Load the about-me content for a player.
    async fn find(&self, player: i64) -> Result<Option<String>, DomainError>;

    /// Insert or replace the about-me content for a player.
    async fn upsert(&self, player: i64, content: &str) -> Result<(), DomainError>;
}
