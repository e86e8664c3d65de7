//! Rate limiting configuration.
//!
//! Describes how often a provider may be called before it starts refusing
//! requests. The crate does not enforce these limits; callers that schedule
//! refreshes read them.

use std::time::Duration;

/// Rate limiting configuration for a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests allowed per minute.
    pub requests_per_minute: u32,

    /// Maximum concurrent requests to this provider.
    pub max_concurrency: usize,

    /// Minimum delay between requests.
    pub min_delay: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests_per_minute: 60,
            max_concurrency: 5,
            min_delay: Duration::from_millis(100),
        }
    }
}
