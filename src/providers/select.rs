//! Provider resolution.
//!
//! Picks the concrete provider for a request. Resolution is total and
//! deterministic: it always terminates with a valid [`ProviderId`], with
//! `internal` as the universal safety net when no credential is present.

use tracing::debug;

use crate::config::Credentials;
use crate::types::{ProviderId, FALLBACK_PRIORITY};

/// Resolves an optional requested provider against configured
/// preference and credential availability.
#[derive(Debug, Clone)]
pub struct ProviderSelector {
    credentials: Credentials,
    preferred: ProviderId,
}

impl ProviderSelector {
    pub fn new(credentials: Credentials, preferred: ProviderId) -> Self {
        Self {
            credentials,
            preferred,
        }
    }

    /// Resolve the provider to use for one request.
    ///
    /// Rules, in order:
    /// 1. an explicit `internal` request is honored unconditionally
    ///    (opt-out of remote calls);
    /// 2. an explicitly requested external provider is used if its
    ///    credential is present;
    /// 3. with no request, the configured preference is substituted and
    ///    the same rule applied;
    /// 4. otherwise the first credentialed provider in
    ///    [`FALLBACK_PRIORITY`] wins;
    /// 5. with no credentials at all, `internal`.
    pub fn resolve(&self, requested: Option<ProviderId>) -> ProviderId {
        let candidate = requested.unwrap_or(self.preferred);

        let resolved = if candidate.is_internal() || self.credentials.available(candidate) {
            candidate
        } else {
            FALLBACK_PRIORITY
                .into_iter()
                .find(|p| self.credentials.available(*p))
                .unwrap_or(ProviderId::Internal)
        };

        if resolved != candidate {
            debug!(
                requested = %candidate,
                resolved = %resolved,
                "provider fell through to first available credential"
            );
        }
        resolved
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn preferred(&self) -> ProviderId {
        self.preferred
    }
}
