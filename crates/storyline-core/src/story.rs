//! Story documents and reaction logic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::repository::StoryRepository;

/// A story's social state: one document per `(player, time)` pair, holding
/// a map from emoji to the names of everyone who reacted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Owning player's id.
    pub player: i64,
    /// Unix timestamp the story was posted, as reported by the upstream.
    pub time: i64,
    /// Emoji → reactor names. Never holds an empty list.
    #[serde(default)]
    pub emotes: BTreeMap<String, Vec<String>>,
}

impl Story {
    /// Creates a fresh story document with no reactions.
    #[must_use]
    pub fn new(player: i64, time: i64) -> Self {
        Self {
            player,
            time,
            emotes: BTreeMap::new(),
        }
    }

    /// Toggles `user_name`'s reaction under `emoji`.
    ///
    /// Adds the name when absent, removes it when present, and drops the
    /// emoji key entirely when its reactor list becomes empty. Returns
    /// whether the reaction is present after the toggle.
    pub fn toggle_reaction(&mut self, emoji: &str, user_name: &str) -> bool {
        let reactors = self.emotes.entry(emoji.to_owned()).or_default();
        let added = match reactors.iter().position(|name| name == user_name) {
            Some(index) => {
                reactors.remove(index);
                false
            }
            None => {
                reactors.push(user_name.to_owned());
                true
            }
        };
        if !added && self.emotes.get(emoji).is_some_and(Vec::is_empty) {
            self.emotes.remove(emoji);
        }
        added
    }
}

/// Returns true iff `s` is exactly one emoji.
#[must_use]
pub fn is_single_emoji(s: &str) -> bool {
    emojis::get(s).is_some()
}

/// Loads the story document for `(player, time)`, inserting a fresh one
/// when none exists yet.
///
/// # Errors
///
/// Propagates repository errors from the lookup or the insert.
pub async fn find_or_create_story(
    repo: &dyn StoryRepository,
    player: i64,
    time: i64,
) -> Result<Story, DomainError> {
    if let Some(story) = repo.find(player, time).await? {
        return Ok(story);
    }
    let story = Story::new(player, time);
    repo.insert(&story).await?;
    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    #[test]
    fn test_toggle_adds_first_reaction() {
        let mut story = Story::new(1, 100);

        let added = story.toggle_reaction("🔥", "joa");

        assert!(added);
        assert_eq!(story.emotes["🔥"], vec!["joa"]);
    }

    #[test]
    fn test_toggle_removes_existing_reaction_and_drops_empty_key() {
        let mut story = Story::new(1, 100);
        story.toggle_reaction("🔥", "joa");

        let added = story.toggle_reaction("🔥", "joa");

        assert!(!added);
        assert!(!story.emotes.contains_key("🔥"));
    }

    #[test]
    fn test_toggle_keeps_key_while_other_reactors_remain() {
        let mut story = Story::new(1, 100);
        story.toggle_reaction("🎉", "joa");
        story.toggle_reaction("🎉", "nonaf");

        story.toggle_reaction("🎉", "joa");

        assert_eq!(story.emotes["🎉"], vec!["nonaf"]);
    }

    #[test]
    fn test_toggle_tracks_emoji_independently() {
        let mut story = Story::new(1, 100);

        story.toggle_reaction("🔥", "joa");
        story.toggle_reaction("🎉", "joa");
        story.toggle_reaction("🔥", "joa");

        assert!(!story.emotes.contains_key("🔥"));
        assert_eq!(story.emotes["🎉"], vec!["joa"]);
    }

    #[test]
    fn test_is_single_emoji() {
        assert!(is_single_emoji("🔥"));
        assert!(is_single_emoji("👍"));
        assert!(!is_single_emoji("🔥🔥"));
        assert!(!is_single_emoji("nope"));
        assert!(!is_single_emoji(""));
    }

    /// Minimal repository capturing inserts, backed by a fixed lookup result.
    struct FixtureRepo {
        found: Option<Story>,
        inserted: Mutex<Vec<Story>>,
    }

    impl FixtureRepo {
        fn new(found: Option<Story>) -> Self {
            Self {
                found,
                inserted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StoryRepository for FixtureRepo {
        async fn find(&self, _player: i64, _time: i64) -> Result<Option<Story>, DomainError> {
            Ok(self.found.clone())
        }

        async fn insert(&self, story: &Story) -> Result<(), DomainError> {
            self.inserted.lock().unwrap().push(story.clone());
            Ok(())
        }

        async fn update_emotes(&self, _story: &Story) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete_for_player(&self, _player: i64) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_find_or_create_returns_existing_story_without_insert() {
        let mut existing = Story::new(5, 200);
        existing.toggle_reaction("🔥", "joa");
        let repo = FixtureRepo::new(Some(existing.clone()));

        let story = find_or_create_story(&repo, 5, 200).await.unwrap();

        assert_eq!(story, existing);
        assert!(repo.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_or_create_inserts_fresh_story_when_missing() {
        let repo = FixtureRepo::new(None);

        let story = find_or_create_story(&repo, 5, 200).await.unwrap();

        assert_eq!(story, Story::new(5, 200));
        assert_eq!(*repo.inserted.lock().unwrap(), vec![Story::new(5, 200)]);
    }
}
