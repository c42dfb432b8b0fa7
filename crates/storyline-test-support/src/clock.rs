//! Pinned clock for token-lifetime tests.

use chrono::{DateTime, Utc};
use storyline_core::clock::Clock;

/// A clock frozen at one instant.
///
/// Signing a session token against a `FixedClock` set far in the past is
/// how the tests produce an already-expired token deterministically.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
