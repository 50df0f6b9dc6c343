use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Request count for one client inside its current window.
#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window limiter keyed by client IP.
///
/// The first request from a client opens a window of `window` length; up to
/// `max_requests` are allowed inside it. Once the window has expired the next
/// request opens a fresh one.
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
        }
    }

    /// Records a request from `key`; returns `false` if it is over the limit.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    pub fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            reset_at: now + self.window,
        });

        if entry.count == 0 || now > entry.reset_at {
            *entry = Window {
                count: 1,
                reset_at: now + self.window,
            };
            return true;
        }

        if entry.count >= self.max_requests {
            tracing::debug!("Rate limit hit: key={key}, count={}", entry.count);
            return false;
        }

        entry.count += 1;
        true
    }

    pub fn cleanup_expired(&self) {
        self.cleanup_expired_at(Instant::now());
    }

    pub fn cleanup_expired_at(&self, now: Instant) {
        self.windows.retain(|_, w| now <= w.reset_at);
        tracing::debug!("Rate limiter size after cleanup: {}", self.tracked_clients());
    }

    /// Number of clients with an open window.
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}
