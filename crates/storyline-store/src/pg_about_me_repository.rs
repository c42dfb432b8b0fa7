//! `PostgreSQL` implementation of the `AboutMeRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use storyline_core::error::DomainError;
use storyline_core::repository::AboutMeRepository;

use crate::storage_err;

/// About-me blurbs stored one row per player.
#[derive(Debug, Clone)]
pub struct PgAboutMeRepository {
    pool: PgPool,
}

impl PgAboutMeRepository {
    /// Creates a new `PgAboutMeRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AboutMeRepository for PgAboutMeRepository {
    async fn find(&self, player: i64) -> Result<Option<String>, DomainError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT content FROM about_me WHERE player = $1")
                .bind(player)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_err)?;
        Ok(row.map(|(content,)| content))
    }

    async fn upsert(&self, player: i64, content: &str) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO about_me (player, content) VALUES ($1, $2) \
             ON CONFLICT (player) DO UPDATE SET content = EXCLUDED.content",
        )
        .bind(player)
        .bind(content)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(())
    }
}
