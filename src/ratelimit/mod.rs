//! Sliding-window admission control.
//!
//! Tracks request timestamps per client identifier over a trailing window.
//! The limiter is an injected component owned by the server state, not a
//! process global, so instances are independently constructible in tests
//! and per deployment.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use thiserror::Error;

/// Default capacity per identifier per window.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default window duration in seconds.
pub const DEFAULT_WINDOW_SECS: u64 = 60;

/// Admission denied: the identifier exhausted its window capacity.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Rate limit exceeded. Try again later.")]
pub struct RateLimitExceeded;

/// Sliding-window rate limiter keyed by an opaque client identifier
/// (typically the peer IP).
///
/// Every admission check prunes expired timestamps across the whole map and
/// evicts identifiers left with none, so the map stays bounded by the set of
/// recently-active clients. The mutex makes the check-and-record step atomic
/// on a multi-threaded runtime.
pub struct RateLimiter {
    capacity: usize,
    window: Duration,
    entries: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(capacity: usize, window: Duration) -> Self {
        Self {
            capacity,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Limiter with the default 100 requests per 60 seconds.
    pub fn default_limits() -> Self {
        Self::new(DEFAULT_CAPACITY, Duration::from_secs(DEFAULT_WINDOW_SECS))
    }

    /// Admit or deny a request from `client_id` at the current instant.
    pub fn check(&self, client_id: &str) -> Result<(), RateLimitExceeded> {
        self.check_at(client_id, Instant::now())
    }

    /// Admit or deny at an explicit instant. Time is a parameter so tests
    /// control the clock.
    ///
    /// Denied requests are not recorded; only admitted ones consume window
    /// capacity.
    pub fn check_at(&self, client_id: &str, now: Instant) -> Result<(), RateLimitExceeded> {
        let mut entries = self.entries.lock();

        // Sweep the whole map: prune expired stamps, evict drained clients.
        entries.retain(|_, stamps| {
            stamps.retain(|&t| now.duration_since(t) < self.window);
            !stamps.is_empty()
        });

        let stamps = entries.entry(client_id.to_string()).or_default();
        if stamps.len() >= self.capacity {
            return Err(RateLimitExceeded);
        }
        stamps.push(now);
        Ok(())
    }
}
