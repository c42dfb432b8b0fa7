//! Time source abstraction.

use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Session-token issuance stamps `iat` and `exp` through this trait, so
/// tests can pin time instead of racing the wall clock.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used by the running server.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
