//! `PostgreSQL` implementation of the `StoryRepository` trait.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use storyline_core::error::DomainError;
use storyline_core::repository::StoryRepository;
use storyline_core::story::Story;

use crate::storage_err;

/// Story documents stored as rows keyed by `(player, post_time)`, with the
/// reaction map in a JSONB column.
#[derive(Debug, Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    /// Creates a new `PgStoryRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type EmoteMap = BTreeMap<String, Vec<String>>;

#[async_trait]
impl StoryRepository for PgStoryRepository {
    async fn find(&self, player: i64, time: i64) -> Result<Option<Story>, DomainError> {
        let row: Option<(i64, i64, Json<EmoteMap>)> = sqlx::query_as(
            "SELECT player, post_time, emotes FROM stories WHERE player = $1 AND post_time = $2",
        )
        .bind(player)
        .bind(time)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_err)?;

        Ok(row.map(|(player, time, Json(emotes))| Story {
            player,
            time,
            emotes,
        }))
    }

    async fn insert(&self, story: &Story) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO stories (player, post_time, emotes) VALUES ($1, $2, $3)")
            .bind(story.player)
            .bind(story.time)
            .bind(Json(&story.emotes))
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn update_emotes(&self, story: &Story) -> Result<(), DomainError> {
        sqlx::query("UPDATE stories SET emotes = $3 WHERE player = $1 AND post_time = $2")
            .bind(story.player)
            .bind(story.time)
            .bind(Json(&story.emotes))
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn delete_for_player(&self, player: i64) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM stories WHERE player = $1")
            .bind(player)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(result.rows_affected())
    }
}
