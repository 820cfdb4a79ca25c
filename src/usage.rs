//! Per-provider hourly usage tracking.
//!
//! Counters are scoped to the current clock hour: the first increment
//! in an hour creates a counter that expires at the top of the next
//! hour, so the effective window is between 0 and 60 minutes. When a
//! provider's budget is exhausted, the façade silently degrades to the
//! local analyzer instead of surfacing a quota error.
//!
//! The check and the increment are separate operations (check-then-act);
//! under concurrent load the budget can be slightly overshot. That
//! matches the request-scoped execution model this engine targets.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::ProviderId;

const SECONDS_PER_HOUR: u64 = 3600;

#[derive(Debug, Clone, Copy)]
struct Counter {
    count: u32,
    /// Unix timestamp of the top of the next hour.
    window_expiry: u64,
}

/// Tracks per-provider request counts within the current clock hour.
pub struct UsageTracker {
    counters: Mutex<HashMap<ProviderId, Counter>>,
    max_per_hour: u32,
    now: fn() -> u64,
}

fn system_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl UsageTracker {
    pub fn new(max_per_hour: u32) -> Self {
        Self::with_clock(max_per_hour, system_now)
    }

    /// Construct with an injectable clock returning Unix seconds.
    pub fn with_clock(max_per_hour: u32, now: fn() -> u64) -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
            max_per_hour,
            now,
        }
    }

    /// Current count for a provider within the live window.
    pub fn usage(&self, provider: ProviderId) -> u32 {
        let now = (self.now)();
        let mut counters = self.counters.lock().expect("usage tracker poisoned");
        match counters.get(&provider) {
            Some(c) if c.window_expiry > now => c.count,
            Some(_) => {
                counters.remove(&provider);
                0
            }
            None => 0,
        }
    }

    /// Record one request and return the new count.
    ///
    /// `internal` is exempt from quota tracking and is never counted.
    pub fn increment(&self, provider: ProviderId) -> u32 {
        if provider.is_internal() {
            return 0;
        }
        let now = (self.now)();
        let mut counters = self.counters.lock().expect("usage tracker poisoned");
        let counter = counters.entry(provider).or_insert(Counter {
            count: 0,
            window_expiry: next_hour_boundary(now),
        });
        if counter.window_expiry <= now {
            *counter = Counter {
                count: 0,
                window_expiry: next_hour_boundary(now),
            };
        }
        counter.count += 1;
        counter.count
    }

    /// Whether the provider's hourly budget is exhausted.
    ///
    /// `internal` never reports exceeded.
    pub fn is_exceeded(&self, provider: ProviderId) -> bool {
        if provider.is_internal() {
            return false;
        }
        self.usage(provider) >= self.max_per_hour
    }

    /// Drop all counters, as a periodic sweeper would.
    pub fn reset_all(&self) {
        self.counters
            .lock()
            .expect("usage tracker poisoned")
            .clear();
    }
}

/// Top of the next clock hour after `now` (Unix seconds).
fn next_hour_boundary(now: u64) -> u64 {
    (now / SECONDS_PER_HOUR + 1) * SECONDS_PER_HOUR
}
