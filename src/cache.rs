//! Result cache for normalized remote responses.
//!
//! Memoizes the engine's expensive results keyed by a deterministic,
//! order-sensitive fingerprint over (task, inputs, resolved provider).
//! Entries expire on a fixed TTL; there is no explicit invalidation —
//! changed inputs simply hash to a different key.
//!
//! Caching rule: only results produced by a remote provider are cached.
//! The local analyzer is cheap and deterministic, so `internal` results
//! are always recomputed; the engine never consults the cache when the
//! resolved provider is `internal`. Article generation is never cached.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use moka::future::Cache;

use crate::telemetry;
use crate::types::{
    ContentAnalysis, ContentOutline, KeywordSet, MetaDescriptionSet, ProviderId,
};

/// Cacheable task discriminator, the first component of the fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TaskKind {
    Analysis,
    Outline,
    Keywords,
    Meta,
}

impl TaskKind {
    fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Analysis => "analysis",
            TaskKind::Outline => "outline",
            TaskKind::Keywords => "keywords",
            TaskKind::Meta => "meta",
        }
    }
}

/// Configuration for the result cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached entries. Default: 10,000.
    pub max_entries: u64,
    /// Time-to-live for cached entries. Default: 1 hour.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl: Duration::from_secs(3600),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Cached normalized result, one variant per cacheable task.
#[derive(Clone, Debug)]
pub(crate) enum CachedResult {
    Analysis(ContentAnalysis),
    Outline(ContentOutline),
    Keywords(KeywordSet),
    Meta(MetaDescriptionSet),
}

/// In-memory TTL cache for normalized results.
pub(crate) struct ResultCache {
    cache: Cache<u64, CachedResult>,
}

impl ResultCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();
        Self { cache }
    }

    /// Look up a cached result. Emits cache hit/miss metrics labelled
    /// by task.
    pub async fn get(&self, task: TaskKind, key: u64) -> Option<CachedResult> {
        match self.cache.get(&key).await {
            Some(value) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL, "operation" => task.as_str())
                    .increment(1);
                Some(value)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "operation" => task.as_str())
                    .increment(1);
                None
            }
        }
    }

    pub async fn insert(&self, key: u64, value: CachedResult) {
        self.cache.insert(key, value).await;
    }
}

/// Compute the fingerprint for a task invocation.
///
/// Order-sensitive hash over task discriminator, raw inputs, and the
/// resolved provider. Deterministic within a process lifetime, which is
/// sufficient for an in-memory cache; a shared backend would want a
/// stable cross-process hash instead.
pub(crate) fn fingerprint(task: TaskKind, provider: ProviderId, inputs: &[&str]) -> u64 {
    let mut hasher = DefaultHasher::new();
    task.as_str().hash(&mut hasher);
    for input in inputs {
        input.hash(&mut hasher);
    }
    provider.as_str().hash(&mut hasher);
    hasher.finish()
}
