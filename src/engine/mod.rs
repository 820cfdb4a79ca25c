//! The engine façade: the five task operations plus diagnostics.
//!
//! Every task follows the same skeleton: resolve a provider, consult
//! the result cache, check the hourly quota, dispatch to the remote
//! client or the local analyzer, normalize, cache, return. All
//! remote-side failures are recovered locally by degrading to the
//! deterministic fallback — callers always get a usable result, and the
//! only surfaced error is invalid input (or an explicit
//! `test_connection` diagnostic).

mod builder;
mod parse;
mod prompts;

pub use builder::{SeoForge, SeoForgeBuilder};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::{fingerprint, CachedResult, ResultCache, TaskKind};
use crate::error::{EngineError, Result};
use crate::fallback;
use crate::providers::{ProviderSelector, RemoteClient};
use crate::telemetry;
use crate::types::{
    ContentAnalysis, ContentOutline, KeywordSet, MetaDescriptionSet, ProviderId, ProviderStatus,
    StatusReport, ALL_PROVIDERS,
};
use crate::usage::UsageTracker;

/// Why a call degraded to the local analyzer (metric label values).
const REASON_QUOTA: &str = "quota";
const REASON_REMOTE_ERROR: &str = "remote_error";
const REASON_PARSE_ERROR: &str = "parse_error";

/// The provider-dispatching engine.
///
/// Constructed via [`SeoForge::builder()`]; immutable once built and
/// safe to share behind an `Arc`.
pub struct Engine {
    selector: ProviderSelector,
    client: RemoteClient,
    usage: UsageTracker,
    cache: ResultCache,
}

impl Engine {
    pub(crate) fn new(
        selector: ProviderSelector,
        client: RemoteClient,
        usage: UsageTracker,
        cache: ResultCache,
    ) -> Self {
        Self {
            selector,
            client,
            usage,
            cache,
        }
    }

    // ========================================================================
    // Task façade
    // ========================================================================

    /// Score and analyze editorial content.
    ///
    /// Empty content is not an error: it short-circuits to the local
    /// analyzer, whose recommendations include the "too short" hint.
    pub async fn analyze_content(
        &self,
        content: &str,
        keywords: &[String],
        context: Option<&str>,
    ) -> Result<ContentAnalysis> {
        let provider = self.selector.resolve(None);
        if provider.is_internal() || content.trim().is_empty() {
            return Ok(self.degrade_to_local("analyze_content", provider, None, || {
                fallback::content_analysis(content, keywords)
            }));
        }

        let joined = keywords.join(",");
        let key = fingerprint(
            TaskKind::Analysis,
            provider,
            &[content, &joined, context.unwrap_or("")],
        );
        if let Some(CachedResult::Analysis(hit)) = self.cache.get(TaskKind::Analysis, key).await {
            return Ok(hit);
        }

        let prompt = prompts::content_analysis(content, keywords, context);
        match self
            .remote_normalized::<ContentAnalysis>(
                provider,
                "analyze_content",
                &prompt,
                prompts::ANALYSIS_SYSTEM_PROMPT,
            )
            .await
        {
            Ok(parsed) => {
                self.cache.insert(key, CachedResult::Analysis(parsed.clone())).await;
                self.record("analyze_content", provider, "ok");
                Ok(parsed)
            }
            Err(reason) => Ok(self.degrade_to_local("analyze_content", provider, Some(reason), || {
                fallback::content_analysis(content, keywords)
            })),
        }
    }

    /// Generate a structured outline for a topic, optionally tailored
    /// to a target audience.
    pub async fn generate_content_outline(
        &self,
        topic: &str,
        audience: &str,
    ) -> Result<ContentOutline> {
        if topic.trim().is_empty() {
            return Err(EngineError::InvalidInput("topic must not be empty".into()));
        }

        let provider = self.selector.resolve(None);
        if provider.is_internal() {
            return Ok(self.degrade_to_local("generate_outline", provider, None, || {
                fallback::content_outline(topic, audience)
            }));
        }

        let key = fingerprint(TaskKind::Outline, provider, &[topic, audience]);
        if let Some(CachedResult::Outline(hit)) = self.cache.get(TaskKind::Outline, key).await {
            return Ok(hit);
        }

        let prompt = prompts::content_outline(topic, audience);
        match self
            .remote_normalized::<ContentOutline>(
                provider,
                "generate_outline",
                &prompt,
                prompts::OUTLINE_SYSTEM_PROMPT,
            )
            .await
        {
            Ok(parsed) => {
                self.cache.insert(key, CachedResult::Outline(parsed.clone())).await;
                self.record("generate_outline", provider, "ok");
                Ok(parsed)
            }
            Err(reason) => Ok(self.degrade_to_local("generate_outline", provider, Some(reason), || {
                fallback::content_outline(topic, audience)
            })),
        }
    }

    /// Expand a primary keyword into semantic, long-tail and LSI
    /// variations grounded in the given content.
    pub async fn analyze_semantic_keywords(
        &self,
        content: &str,
        primary_keyword: &str,
    ) -> Result<KeywordSet> {
        if primary_keyword.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "primary keyword must not be empty".into(),
            ));
        }

        let provider = self.selector.resolve(None);
        if provider.is_internal() {
            return Ok(self.degrade_to_local("semantic_keywords", provider, None, || {
                fallback::keyword_set(primary_keyword)
            }));
        }

        let key = fingerprint(TaskKind::Keywords, provider, &[content, primary_keyword]);
        if let Some(CachedResult::Keywords(hit)) = self.cache.get(TaskKind::Keywords, key).await {
            return Ok(hit);
        }

        let prompt = prompts::semantic_keywords(content, primary_keyword);
        match self
            .remote_normalized::<KeywordSet>(
                provider,
                "semantic_keywords",
                &prompt,
                prompts::KEYWORDS_SYSTEM_PROMPT,
            )
            .await
        {
            Ok(parsed) => {
                self.cache.insert(key, CachedResult::Keywords(parsed.clone())).await;
                self.record("semantic_keywords", provider, "ok");
                Ok(parsed)
            }
            Err(reason) => Ok(self.degrade_to_local("semantic_keywords", provider, Some(reason), || {
                fallback::keyword_set(primary_keyword)
            })),
        }
    }

    /// Generate meta-description variations for a titled piece of
    /// content.
    pub async fn generate_meta_description(
        &self,
        title: &str,
        content: &str,
        keywords: &[String],
    ) -> Result<MetaDescriptionSet> {
        if title.trim().is_empty() {
            return Err(EngineError::InvalidInput("title must not be empty".into()));
        }

        let provider = self.selector.resolve(None);
        if provider.is_internal() {
            return Ok(self.degrade_to_local("meta_description", provider, None, || {
                fallback::meta_descriptions(title, content, keywords)
            }));
        }

        let joined = keywords.join(",");
        let key = fingerprint(TaskKind::Meta, provider, &[title, content, &joined]);
        if let Some(CachedResult::Meta(hit)) = self.cache.get(TaskKind::Meta, key).await {
            return Ok(hit);
        }

        let prompt = prompts::meta_description(title, content, keywords);
        match self
            .remote_normalized::<MetaDescriptionSet>(
                provider,
                "meta_description",
                &prompt,
                prompts::META_SYSTEM_PROMPT,
            )
            .await
        {
            Ok(parsed) => {
                self.cache.insert(key, CachedResult::Meta(parsed.clone())).await;
                self.record("meta_description", provider, "ok");
                Ok(parsed)
            }
            Err(reason) => Ok(self.degrade_to_local("meta_description", provider, Some(reason), || {
                fallback::meta_descriptions(title, content, keywords)
            })),
        }
    }

    /// Generate a raw article body from a free-form brief.
    ///
    /// Not cached and not JSON-normalized: the provider's text is the
    /// result.
    pub async fn generate_article_content(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(EngineError::InvalidInput("prompt must not be empty".into()));
        }

        let provider = self.selector.resolve(None);
        if provider.is_internal() {
            return Ok(self.degrade_to_local("generate_article", provider, None, || {
                fallback::article_html(article_topic(prompt), &[])
            }));
        }

        if self.usage.is_exceeded(provider) {
            self.note_quota_exceeded(provider);
            return Ok(self.degrade_to_local("generate_article", provider, Some(REASON_QUOTA), || {
                fallback::article_html(article_topic(prompt), &[])
            }));
        }

        self.usage.increment(provider);
        match self
            .client
            .call(provider, prompt, prompts::ARTICLE_SYSTEM_PROMPT)
            .await
        {
            Ok(text) => {
                self.record("generate_article", provider, "ok");
                Ok(text)
            }
            Err(e) => {
                warn!(provider = %provider, error = %e, "remote article generation failed");
                Ok(self.degrade_to_local(
                    "generate_article",
                    provider,
                    Some(REASON_REMOTE_ERROR),
                    || fallback::article_html(article_topic(prompt), &[]),
                ))
            }
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Per-provider availability and the active provider, for settings
    /// and dashboard rendering.
    pub fn provider_status(&self) -> StatusReport {
        let active = self.selector.resolve(None);
        StatusReport {
            providers: ALL_PROVIDERS
                .into_iter()
                .map(|id| ProviderStatus {
                    id,
                    name: id.display_name(),
                    available: self.selector.credentials().available(id),
                    is_active: id == active,
                })
                .collect(),
            active_provider: active,
        }
    }

    /// Validate a provider's credential with a minimal prompt.
    ///
    /// Bypasses cache and quota, and surfaces the underlying error
    /// verbatim — this is a diagnostic, not a generation task.
    pub async fn test_connection(&self, provider: ProviderId) -> Result<String> {
        if provider.is_internal() {
            return Ok("local analyzer is always available".to_string());
        }
        self.client
            .call(provider, "Reply with the single word: OK", "")
            .await
    }

    /// Current hourly usage count for a provider.
    pub fn usage(&self, provider: ProviderId) -> u32 {
        self.usage.usage(provider)
    }

    /// Reset all hourly usage counters, as a periodic sweeper would.
    pub fn reset_usage(&self) {
        self.usage.reset_all();
    }

    // ========================================================================
    // Shared dispatch plumbing
    // ========================================================================

    /// Quota-checked remote call that parses the response into a
    /// normalized result. Returns the degradation reason on any
    /// recoverable failure.
    async fn remote_normalized<T: DeserializeOwned>(
        &self,
        provider: ProviderId,
        operation: &'static str,
        prompt: &str,
        system_prompt: &str,
    ) -> std::result::Result<T, &'static str> {
        if self.usage.is_exceeded(provider) {
            self.note_quota_exceeded(provider);
            return Err(REASON_QUOTA);
        }
        self.usage.increment(provider);

        let text = match self.client.call(provider, prompt, system_prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = %provider, operation, error = %e, "remote call failed");
                return Err(REASON_REMOTE_ERROR);
            }
        };

        let value = match parse::response_json(&text) {
            Some(value) => value,
            None => {
                warn!(provider = %provider, operation, "remote response was not JSON");
                return Err(REASON_PARSE_ERROR);
            }
        };

        serde_json::from_value(value).map_err(|e| {
            warn!(provider = %provider, operation, error = %e, "remote JSON had unusable shape");
            REASON_PARSE_ERROR
        })
    }

    /// Compute a local-analyzer result, recording why the remote path
    /// was not taken (`None` = internal provider resolved directly).
    fn degrade_to_local<T>(
        &self,
        operation: &'static str,
        provider: ProviderId,
        reason: Option<&'static str>,
        compute: impl FnOnce() -> T,
    ) -> T {
        if let Some(reason) = reason {
            metrics::counter!(telemetry::FALLBACKS_TOTAL,
                "operation" => operation,
                "reason" => reason,
            )
            .increment(1);
        } else {
            debug!(operation, "serving from local analyzer");
        }
        self.record(operation, provider, "ok");
        compute()
    }

    fn note_quota_exceeded(&self, provider: ProviderId) {
        warn!(provider = %provider, "hourly quota exceeded, degrading to local analyzer");
        metrics::counter!(telemetry::QUOTA_EXCEEDED_TOTAL, "provider" => provider.as_str())
            .increment(1);
    }

    fn record(&self, operation: &'static str, provider: ProviderId, status: &'static str) {
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "provider" => provider.as_str(),
            "operation" => operation,
            "status" => status,
        )
        .increment(1);
    }
}

/// Best-effort topic extraction from a free-form article brief, used
/// only by the local article template.
fn article_topic(prompt: &str) -> &str {
    for line in prompt.lines() {
        if let Some(rest) = line.strip_prefix("Article Title:") {
            let rest = rest.trim();
            if !rest.is_empty() {
                return rest;
            }
        }
    }
    prompt
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("this topic")
}
