//! Engine configuration: credentials and preferences.
//!
//! Loaded once at engine construction (via [`SeoForgeBuilder`]) and
//! immutable afterwards. The settings/administration collaborator owns
//! the persisted form; this type is its in-memory snapshot.
//!
//! [`SeoForgeBuilder`]: crate::SeoForgeBuilder

use crate::types::ProviderId;

/// Per-provider API credentials.
///
/// Empty strings mean "not configured" — the selector treats an empty
/// credential as an unavailable provider. `Internal` needs no credential
/// and is always available.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub openai: String,
    pub grok: String,
    pub gemini: String,
    pub deepseek: String,
}

impl Credentials {
    /// The credential for a provider (`""` for `internal`).
    pub fn get(&self, provider: ProviderId) -> &str {
        match provider {
            ProviderId::Internal => "",
            ProviderId::OpenAi => &self.openai,
            ProviderId::Grok => &self.grok,
            ProviderId::Gemini => &self.gemini,
            ProviderId::DeepSeek => &self.deepseek,
        }
    }

    /// Whether a provider can be dispatched to.
    pub fn available(&self, provider: ProviderId) -> bool {
        provider.is_internal() || !self.get(provider).is_empty()
    }
}

/// Immutable engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub credentials: Credentials,
    /// Provider used when the caller does not request one explicitly.
    pub preferred: ProviderId,
    /// Per-provider hourly request budget.
    pub max_requests_per_hour: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            preferred: ProviderId::OpenAi,
            max_requests_per_hour: 100,
        }
    }
}
