// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bounded retry around `SQLite` lock contention.
//!
//! `busy_timeout` makes each statement wait for the write lock on its own;
//! the retry loop adds a few whole-transaction attempts on top, with linear
//! backoff and a little jitter so that waiting writers do not wake in step.

use std::time::Duration;
use tracing::warn;

use crate::error::PersistenceError;

/// How hard to try before reporting `PersistenceError::Busy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Never below 1.
    pub max_attempts: u32,
    /// `SQLite` busy timeout applied to the connection.
    pub busy_timeout: Duration,
    /// Backoff step; attempt `n` sleeps `n * backoff` plus jitter.
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Creates a policy from the server's command-line values.
    #[must_use]
    pub fn new(max_attempts: u32, busy_timeout_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            busy_timeout: Duration::from_millis(busy_timeout_ms),
            backoff: Duration::from_millis(25),
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        let jitter_ceiling: u64 = u64::try_from(self.backoff.as_millis()).unwrap_or(u64::MAX);
        let jitter: u64 = rand::random::<u64>() % jitter_ceiling.saturating_add(1);
        self.backoff.saturating_mul(attempt) + Duration::from_millis(jitter)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(5, 250)
    }
}

/// Runs `op` until it succeeds, fails with anything but `Busy`, or the
/// attempts run out.
///
/// # Errors
///
/// Returns the last error of `op`; `PersistenceError::Busy` when every
/// attempt hit lock contention.
pub fn with_busy_retry<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T, PersistenceError>
where
    F: FnMut() -> Result<T, PersistenceError>,
{
    let mut attempt: u32 = 1;
    loop {
        match op() {
            Err(PersistenceError::Busy) if attempt < policy.max_attempts => {
                let delay: Duration = policy.delay_for(attempt);
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "Database busy, retrying"
                );
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(PersistenceError::Busy) => {
                warn!(attempt, "Database busy, giving up");
                return Err(PersistenceError::Busy);
            }
            other => return other,
        }
    }
}
