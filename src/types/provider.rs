//! Provider identity and derived status types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of a text-generation provider.
///
/// `Internal` is the deterministic local analyzer — always available,
/// never rate limited, and the universal safety net for provider
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Internal,
    #[serde(rename = "openai")]
    OpenAi,
    Grok,
    Gemini,
    #[serde(rename = "deepseek")]
    DeepSeek,
}

/// Fallthrough order used when the requested/preferred provider has no
/// credential: first external provider with a key wins.
pub const FALLBACK_PRIORITY: [ProviderId; 4] = [
    ProviderId::OpenAi,
    ProviderId::Grok,
    ProviderId::Gemini,
    ProviderId::DeepSeek,
];

/// All providers, for status reporting.
pub const ALL_PROVIDERS: [ProviderId; 5] = [
    ProviderId::OpenAi,
    ProviderId::Grok,
    ProviderId::Gemini,
    ProviderId::DeepSeek,
    ProviderId::Internal,
];

impl ProviderId {
    /// Stable lowercase identifier, used in cache keys and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Internal => "internal",
            ProviderId::OpenAi => "openai",
            ProviderId::Grok => "grok",
            ProviderId::Gemini => "gemini",
            ProviderId::DeepSeek => "deepseek",
        }
    }

    /// Human-readable name for dashboards.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Internal => "Internal Analyzer (Fallback)",
            ProviderId::OpenAi => "OpenAI (GPT)",
            ProviderId::Grok => "Grok",
            ProviderId::Gemini => "Google Gemini",
            ProviderId::DeepSeek => "DeepSeek",
        }
    }

    /// Whether this provider is the local analyzer rather than a remote API.
    pub fn is_internal(&self) -> bool {
        matches!(self, ProviderId::Internal)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "internal" => Ok(ProviderId::Internal),
            "openai" => Ok(ProviderId::OpenAi),
            "grok" => Ok(ProviderId::Grok),
            "gemini" => Ok(ProviderId::Gemini),
            "deepseek" => Ok(ProviderId::DeepSeek),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised provider name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

/// Derived availability/activity of a single provider. Computed on
/// demand for settings and dashboard rendering; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub id: ProviderId,
    pub name: &'static str,
    /// A credential is present (always true for `internal`).
    pub available: bool,
    /// Provider resolution with no explicit request lands here.
    pub is_active: bool,
}

/// Full provider status report, as consumed by the settings UI.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub providers: Vec<ProviderStatus>,
    pub active_provider: ProviderId,
}
