use std::time::{Duration, Instant};

use crate::mx::LookupMx;
use crate::ratelimit::RateLimiter;

/// Shared application state, generic over the DNS backend so tests can
/// inject stub resolvers.
pub struct AppState<R: LookupMx> {
    pub limiter: RateLimiter,
    pub resolver: R,
    pub resolver_timeout: Duration,
    pub started_at: Instant,
}

impl<R: LookupMx> AppState<R> {
    pub fn new(limiter: RateLimiter, resolver: R, resolver_timeout: Duration) -> Self {
        Self {
            limiter,
            resolver,
            resolver_timeout,
            started_at: Instant::now(),
        }
    }
}
