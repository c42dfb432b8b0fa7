//! Storyline Store — `PostgreSQL` implementations of the document
//! repositories defined in `storyline-core`.

pub mod pg_about_me_repository;
pub mod pg_story_repository;

pub use pg_about_me_repository::PgAboutMeRepository;
pub use pg_story_repository::PgStoryRepository;

use storyline_core::error::DomainError;

/// Maps a database error onto the domain storage error.
pub(crate) fn storage_err(err: sqlx::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}
