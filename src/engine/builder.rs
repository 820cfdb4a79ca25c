//! Builder for configuring engine instances.

use super::Engine;
use crate::cache::{CacheConfig, ResultCache};
use crate::config::EngineConfig;
use crate::providers::{ProviderSelector, RemoteClient, RetryPolicy};
use crate::types::ProviderId;
use crate::usage::UsageTracker;

/// Main entry point for creating engine instances.
pub struct SeoForge;

impl SeoForge {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> SeoForgeBuilder {
        SeoForgeBuilder::new()
    }
}

/// Builder for configuring engine instances.
///
/// Configuration is injected here once; the built [`Engine`] is
/// immutable and safe to share.
pub struct SeoForgeBuilder {
    config: EngineConfig,
    retry: RetryPolicy,
    cache: CacheConfig,
    endpoint_overrides: Vec<(ProviderId, String)>,
}

impl SeoForgeBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            retry: RetryPolicy::default(),
            cache: CacheConfig::default(),
            endpoint_overrides: Vec::new(),
        }
    }

    /// Configure the OpenAI credential.
    pub fn openai_key(mut self, key: impl Into<String>) -> Self {
        self.config.credentials.openai = key.into();
        self
    }

    /// Configure the Grok credential.
    pub fn grok_key(mut self, key: impl Into<String>) -> Self {
        self.config.credentials.grok = key.into();
        self
    }

    /// Configure the Gemini credential.
    pub fn gemini_key(mut self, key: impl Into<String>) -> Self {
        self.config.credentials.gemini = key.into();
        self
    }

    /// Configure the DeepSeek credential.
    pub fn deepseek_key(mut self, key: impl Into<String>) -> Self {
        self.config.credentials.deepseek = key.into();
        self
    }

    /// Provider used when the caller does not request one explicitly.
    /// Default: OpenAI.
    pub fn preferred_provider(mut self, provider: ProviderId) -> Self {
        self.config.preferred = provider;
        self
    }

    /// Per-provider hourly request budget. Default: 100.
    pub fn max_requests_per_hour(mut self, max: u32) -> Self {
        self.config.max_requests_per_hour = max;
        self
    }

    /// Retry behaviour for remote calls.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Result cache sizing and TTL.
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Override a provider's base URL (for testing with wiremock).
    pub fn endpoint_override(
        mut self,
        provider: ProviderId,
        base_url: impl Into<String>,
    ) -> Self {
        self.endpoint_overrides.push((provider, base_url.into()));
        self
    }

    /// Build the engine. Infallible: with no credentials configured,
    /// every request resolves to the local analyzer.
    pub fn build(self) -> Engine {
        let credentials = self.config.credentials.clone();

        let mut client = RemoteClient::new(credentials.clone(), self.retry);
        for (provider, base_url) in self.endpoint_overrides {
            client = client.with_base_url(provider, base_url);
        }

        Engine::new(
            ProviderSelector::new(credentials, self.config.preferred),
            client,
            UsageTracker::new(self.config.max_requests_per_hour),
            ResultCache::new(&self.cache),
        )
    }
}

impl Default for SeoForgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
