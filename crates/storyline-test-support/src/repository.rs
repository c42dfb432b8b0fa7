//! Test repositories — in-memory and failing implementations of the
//! document repository traits.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use storyline_core::error::DomainError;
use storyline_core::repository::{AboutMeRepository, StoryRepository};
use storyline_core::story::Story;

/// A story repository backed by an in-memory map keyed by `(player, time)`.
#[derive(Debug, Default)]
pub struct InMemoryStoryRepository {
    stories: Mutex<BTreeMap<(i64, i64), Story>>,
}

impl InMemoryStoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with the given stories.
    #[must_use]
    pub fn with_stories(stories: Vec<Story>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.stories.lock().unwrap();
            for story in stories {
                map.insert((story.player, story.time), story);
            }
        }
        repo
    }

    /// Returns a snapshot of every stored story.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn stories(&self) -> Vec<Story> {
        self.stories.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn find(&self, player: i64, time: i64) -> Result<Option<Story>, DomainError> {
        Ok(self.stories.lock().unwrap().get(&(player, time)).cloned())
    }

    async fn insert(&self, story: &Story) -> Result<(), DomainError> {
        self.stories
            .lock()
            .unwrap()
            .insert((story.player, story.time), story.clone());
        Ok(())
    }

    async fn update_emotes(&self, story: &Story) -> Result<(), DomainError> {
        self.stories
            .lock()
            .unwrap()
            .insert((story.player, story.time), story.clone());
        Ok(())
    }

    async fn delete_for_player(&self, player: i64) -> Result<u64, DomainError> {
        let mut map = self.stories.lock().unwrap();
        let before = map.len();
        map.retain(|(owner, _), _| *owner != player);
        Ok((before - map.len()) as u64)
    }
}

/// A story repository whose every operation fails with a storage error.
#[derive(Debug, Default)]
pub struct FailingStoryRepository;

#[async_trait]
impl StoryRepository for FailingStoryRepository {
    async fn find(&self, _player: i64, _time: i64) -> Result<Option<Story>, DomainError> {
        Err(DomainError::Storage("simulated storage failure".to_string()))
    }

    async fn insert(&self, _story: &Story) -> Result<(), DomainError> {
        Err(DomainError::Storage("simulated storage failure".to_string()))
    }

    async fn update_emotes(&self, _story: &Story) -> Result<(), DomainError> {
        Err(DomainError::Storage("simulated storage failure".to_string()))
    }

    async fn delete_for_player(&self, _player: i64) -> Result<u64, DomainError> {
        Err(DomainError::Storage("simulated storage failure".to_string()))
    }
}

/// An about-me repository backed by an in-memory map keyed by player id.
#[derive(Debug, Default)]
pub struct InMemoryAboutMeRepository {
    entries: Mutex<BTreeMap<i64, String>>,
}

impl InMemoryAboutMeRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with one blurb.
    #[must_use]
    pub fn with_entry(player: i64, content: &str) -> Self {
        let repo = Self::new();
        repo.entries
            .lock()
            .unwrap()
            .insert(player, content.to_string());
        repo
    }

    /// Returns the stored blurb for a player, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn content_for(&self, player: i64) -> Option<String> {
        self.entries.lock().unwrap().get(&player).cloned()
    }
}

#[async_trait]
impl AboutMeRepository for InMemoryAboutMeRepository {
    async fn find(&self, player: i64) -> Result<Option<String>, DomainError> {
        Ok(self.entries.lock().unwrap().get(&player).cloned())
    }

    async fn upsert(&self, player: i64, content: &str) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .insert(player, content.to_string());
        Ok(())
    }
}

/// An about-me repository whose every operation fails with a storage error.
#[derive(Debug, Default)]
pub struct FailingAboutMeRepository;

#[async_trait]
impl AboutMeRepository for FailingAboutMeRepository {
    async fn find(&self, _player: i64) -> Result<Option<String>, DomainError> {
        Err(DomainError::Storage("simulated storage failure".to_string()))
    }

    async fn upsert(&self, _player: i64, _content: &str) -> Result<(), DomainError> {
        Err(DomainError::Storage("simulated storage failure".to_string()))
    }
}
