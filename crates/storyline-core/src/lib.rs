//! Storyline Core — shared domain types and seams.
//!
//! This crate defines the story and about-me domain model plus the traits
//! the infrastructure crates implement. It contains no infrastructure code.

pub mod clock;
pub mod directory;
pub mod error;
pub mod player;
pub mod repository;
pub mod story;
