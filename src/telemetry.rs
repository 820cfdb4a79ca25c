//! Telemetry metric name constants.
//!
//! Centralised metric names for seoforge operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `seoforge_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `provider` — resolved provider (e.g. "openai", "internal")
//! - `operation` — façade operation (e.g. "analyze_content", "outline")
//! - `status` — outcome: "ok" or "error"
//! - `reason` — why a call degraded to the local analyzer

/// Total requests dispatched through the engine façade.
///
/// Labels: `provider`, `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "seoforge_requests_total";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `provider`, `operation`.
pub const RETRIES_TOTAL: &str = "seoforge_retries_total";

/// Total result-cache hits.
///
/// Labels: `operation`.
pub const CACHE_HITS_TOTAL: &str = "seoforge_cache_hits_total";

/// Total result-cache misses.
///
/// Labels: `operation`.
pub const CACHE_MISSES_TOTAL: &str = "seoforge_cache_misses_total";

/// Total calls that degraded to the local fallback analyzer.
///
/// Labels: `operation`, `reason` ("quota" | "remote_error" | "parse_error").
pub const FALLBACKS_TOTAL: &str = "seoforge_fallbacks_total";

/// Total calls short-circuited by the hourly quota.
///
/// Labels: `provider`.
pub const QUOTA_EXCEEDED_TOTAL: &str = "seoforge_quota_exceeded_total";
