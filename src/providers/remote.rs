//! HTTP client for the remote text-generation providers.
//!
//! One POST per call, routed through the per-provider adapter for
//! endpoint, auth placement and envelope differences. Transient failures
//! go through the shared retry loop; everything the caller sees is
//! either the extracted text payload or an [`EngineError`].

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::adapter::{adapter_for, ProviderAdapter};
use super::retry::{with_retry, RetryPolicy};
use crate::config::Credentials;
use crate::error::{EngineError, Result};
use crate::types::ProviderId;

/// Fixed per-attempt timeout for provider calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the remote provider HTTP APIs.
#[derive(Clone)]
pub struct RemoteClient {
    http: Client,
    credentials: Credentials,
    retry: RetryPolicy,
    /// Per-provider base URL overrides (for testing with wiremock).
    base_urls: HashMap<ProviderId, String>,
}

impl RemoteClient {
    pub fn new(credentials: Credentials, retry: RetryPolicy) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            credentials,
            retry,
            base_urls: HashMap::new(),
        }
    }

    /// Override a provider's base URL (for testing with wiremock).
    pub fn with_base_url(mut self, provider: ProviderId, base_url: impl Into<String>) -> Self {
        self.base_urls.insert(provider, base_url.into());
        self
    }

    /// Send one prompt to a provider and return the extracted text.
    ///
    /// Fails fast with `MissingCredential` when the provider has no key
    /// configured. The selector normally filters for availability, but
    /// the client stays independently safe when called directly (e.g.
    /// from `test_connection`).
    pub async fn call(
        &self,
        provider: ProviderId,
        prompt: &str,
        system_prompt: &str,
    ) -> Result<String> {
        // `internal` has no remote endpoint; callers route it to the
        // local analyzer before reaching the client.
        let adapter = adapter_for(provider).ok_or(EngineError::MissingCredential(provider))?;

        let api_key = self.credentials.get(provider);
        if api_key.is_empty() {
            return Err(EngineError::MissingCredential(provider));
        }

        let base_url = self
            .base_urls
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| adapter.default_base_url());
        let url = adapter.endpoint(base_url, api_key);
        let body = adapter.request_body(prompt, system_prompt);

        with_retry(&self.retry, provider.as_str(), "call", || {
            self.attempt(adapter, &url, api_key, &body)
        })
        .await
    }

    /// One HTTP attempt: POST, classify the status, extract the text.
    async fn attempt(
        &self,
        adapter: &dyn ProviderAdapter,
        url: &str,
        api_key: &str,
        body: &serde_json::Value,
    ) -> Result<String> {
        let mut request = self.http.post(url).json(body);
        if let Some(token) = adapter.bearer_token(api_key) {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(EngineError::RateLimited { retry_after });
        }

        let text = response
            .text()
            .await
            .map_err(|e| EngineError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(EngineError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        adapter
            .extract_text(&text)
            .ok_or(EngineError::InvalidResponse(adapter.id()))
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull the provider's error message out of a non-200 body, falling
/// back to a generic string when the body isn't the usual
/// `{"error":{"message":...}}` shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| "API request failed".to_string())
}
