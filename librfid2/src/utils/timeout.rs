//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the commonly used presence
//! timeout values and provide a small conversion helper so tests and code can
//! express timeouts in milliseconds clearly.

use std::time::Duration;

/// Default time a reader waits for a tag to show up before giving up.
pub const DEFAULT_PRESENCE_TIMEOUT_MS: u64 = 3000;

/// Interval at which hardware stores poll for tag presence while waiting.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default presence timeout as Duration.
pub fn default_presence_timeout() -> Duration {
    ms(DEFAULT_PRESENCE_TIMEOUT_MS)
}
