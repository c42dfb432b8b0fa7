//! Upstream player directory abstraction.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::player::Player;

/// Client seam for the upstream platform identity API.
///
/// The production implementation lives in `storyline-upstream`; tests use
/// the stub in `storyline-test-support`.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Check a platform credential. Returns whether the upstream accepted
    /// the `(name, token)` pair.
    async fn verify_credential(&self, name: &str, token: &str) -> Result<bool, DomainError>;

    /// Fetch a player profile. The upstream accepts either a numeric id or
    /// a player name; `key` is forwarded verbatim.
    async fn fetch_player(&self, key: &str) -> Result<Player, DomainError>;
}
