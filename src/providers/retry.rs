//! Retry policy and the shared retry loop.
//!
//! The remote client retries transient failures (transport errors and
//! HTTP 429) with fixed pauses: 1 s after a transport failure, 2 s after
//! rate limiting, up to three additional attempts. The policy is an
//! explicit injectable value so tests can collapse the delays.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{EngineError, Result};
use crate::telemetry;

/// Retry behaviour for transient remote-call failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the initial request. Default: 3.
    pub max_retries: u32,
    /// Pause after a transport failure. Default: 1 s.
    pub transport_delay: Duration,
    /// Pause after HTTP 429, unless the provider sends a
    /// `retry-after` hint. Default: 2 s.
    pub rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            transport_delay: Duration::from_secs(1),
            rate_limit_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that never retries (single attempt).
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    pub fn transport_delay(mut self, delay: Duration) -> Self {
        self.transport_delay = delay;
        self
    }

    pub fn rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Pause before the next attempt, given the error that triggered it.
    /// A provider `retry-after` hint takes precedence.
    pub fn delay_for(&self, err: &EngineError) -> Duration {
        match err {
            EngineError::RateLimited { retry_after } => {
                retry_after.unwrap_or(self.rate_limit_delay)
            }
            _ => self.transport_delay,
        }
    }
}

/// Execute an async operation with the retry loop.
///
/// Transient errors (per [`EngineError::is_transient()`]) are retried up
/// to `policy.max_retries` additional times; permanent errors are
/// returned immediately.
pub(crate) async fn with_retry<F, Fut, T>(
    policy: &RetryPolicy,
    provider: &str,
    operation: &str,
    f: F,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_err = None;
    for attempt in 0..=policy.max_retries {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_transient() => {
                metrics::counter!(telemetry::RETRIES_TOTAL,
                    "provider" => provider.to_owned(),
                    "operation" => operation.to_owned(),
                )
                .increment(1);
                if attempt < policy.max_retries {
                    let delay = policy.delay_for(&e);
                    warn!(
                        provider,
                        operation,
                        attempt = attempt + 1,
                        max_retries = policy.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying after transient error"
                    );
                    tokio::time::sleep(delay).await;
                }
                last_err = Some(e);
            }
            Err(e) => return Err(e), // permanent error, no retry
        }
    }
    Err(last_err.unwrap_or_else(|| EngineError::Transport("retries exhausted".into())))
}
