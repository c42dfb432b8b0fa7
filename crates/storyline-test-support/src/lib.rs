//! Shared test doubles for the Storyline social backend.

mod clock;
mod directory;
mod repository;

pub use clock::FixedClock;
pub use directory::{
    FailingPlayerDirectory, StubPlayerDirectory, player_with_story, player_without_story,
};
pub use repository::{
    FailingAboutMeRepository, FailingStoryRepository, InMemoryAboutMeRepository,
    InMemoryStoryRepository,
};
