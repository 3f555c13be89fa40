//! Turso transient error retry logic.
//!
//! Hosted replicas occasionally answer with 400-level Hrana errors while a
//! node is being recycled. They clear on their own within seconds, so the
//! store retries them with capped exponential backoff.
//!
//! Local-only databases never encounter these errors; the retry path is
//! gated on `UpDb::is_synced_replica`.

use std::time::Duration;

/// Configuration for retry behavior on transient Turso errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Detect transient Turso infrastructure errors.
///
/// Narrow on purpose: genuine SQL and constraint errors are never retried.
pub fn is_transient_turso_error(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("unable to acquire shared lock")
        || msg.contains("deletion must be in progress")
}
