//! Client-side rate gate for Yahoo Finance requests
//!
//! Enforces a minimum spacing between consecutive outbound requests.
//! The last-request timestamp lives behind an async mutex that stays locked
//! across the delay, so "check elapsed, wait, stamp" runs as one unit and
//! concurrent callers are released one interval apart.

use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Minimum spacing between two outbound requests
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

static GLOBAL: OnceLock<Arc<RateLimiter>> = OnceLock::new();

/// Minimum-interval gate shared by every caller that holds it
#[derive(Debug)]
pub struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Create a gate with the default 500 ms spacing
    pub fn new() -> Self {
        Self::with_interval(MIN_REQUEST_INTERVAL)
    }

    /// Create a gate with custom spacing (for testing)
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval,
        }
    }

    /// Process-wide gate used by every client built from configuration
    pub fn global() -> Arc<RateLimiter> {
        GLOBAL.get_or_init(|| Arc::new(RateLimiter::new())).clone()
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a request may be dispatched, then record it
    ///
    /// Returns the instant stamped as the new last-request time. The caller
    /// is expected to dispatch immediately afterwards.
    pub async fn wait(&self) -> Instant {
        let mut last_request = self.last_request.lock().await;

        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let delay = self.min_interval - elapsed;
                debug!(delay_ms = delay.as_millis() as u64, "Rate gate delaying request");
                tokio::time::sleep(delay).await;
            }
        }

        let now = Instant::now();
        *last_request = Some(now);
        now
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_not_delayed() {
        let limiter = RateLimiter::new();

        let start = Instant::now();
        let stamped = limiter.wait().await;

        assert_eq!(stamped.duration_since(start), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_requests_are_spaced() {
        let limiter = RateLimiter::new();

        let mut stamps = Vec::new();
        for _ in 0..5 {
            stamps.push(limiter.wait().await);
        }

        for pair in stamps.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= MIN_REQUEST_INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_after_interval_has_passed() {
        let limiter = RateLimiter::new();
        limiter.wait().await;

        tokio::time::advance(Duration::from_millis(800)).await;

        let before = Instant::now();
        let stamped = limiter.wait().await;
        assert_eq!(stamped.duration_since(before), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_partial_wait_covers_only_remainder() {
        let limiter = RateLimiter::new();
        let first = limiter.wait().await;

        tokio::time::advance(Duration::from_millis(200)).await;

        let second = limiter.wait().await;
        let gap = second.duration_since(first);
        assert!(gap >= MIN_REQUEST_INTERVAL);
        assert!(gap < MIN_REQUEST_INTERVAL + Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_are_serialized() {
        let limiter = Arc::new(RateLimiter::with_interval(Duration::from_millis(250)));

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let limiter = limiter.clone();
                tokio::spawn(async move { limiter.wait().await })
            })
            .collect();

        let mut stamps = Vec::new();
        for handle in handles {
            stamps.push(handle.await.unwrap());
        }
        stamps.sort();

        for pair in stamps.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(250));
        }
    }

    #[test]
    fn test_global_gate_is_shared() {
        let a = RateLimiter::global();
        let b = RateLimiter::global();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.min_interval(), MIN_REQUEST_INTERVAL);
    }
}
