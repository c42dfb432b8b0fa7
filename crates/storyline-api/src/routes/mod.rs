//! Route modules, one per endpoint group.

pub mod about;
pub mod authenticate;
pub mod health;
pub mod profile;
pub mod react;
