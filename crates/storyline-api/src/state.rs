//! Shared application state.

use std::sync::Arc;

use storyline_core::clock::Clock;
use storyline_core::directory::PlayerDirectory;
use storyline_core::repository::{AboutMeRepository, StoryRepository};

use crate::token::TokenSigner;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Story document repository.
    pub stories: Arc<dyn StoryRepository>,
    /// About-me repository.
    pub about_me: Arc<dyn AboutMeRepository>,
    /// Upstream player directory client.
    pub directory: Arc<dyn PlayerDirectory>,
    /// Time source for token issuance.
    pub clock: Arc<dyn Clock>,
    /// Session token signer.
    pub tokens: TokenSigner,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        stories: Arc<dyn StoryRepository>,
        about_me: Arc<dyn AboutMeRepository>,
        directory: Arc<dyn PlayerDirectory>,
        clock: Arc<dyn Clock>,
        tokens: TokenSigner,
    ) -> Self {
        Self {
            stories,
            about_me,
            directory,
            clock,
            tokens,
        }
    }
}
