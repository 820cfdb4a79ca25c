//! Per-provider request/response adapters.
//!
//! Each remote provider has its own endpoint, authentication placement
//! (bearer header vs. URL query parameter) and request/response envelope.
//! Adapters normalize those differences down to "build a body, extract
//! one text payload", keeping [`RemoteClient`](super::RemoteClient)
//! provider-agnostic above this boundary.

use serde::{Deserialize, Serialize};

use crate::types::ProviderId;

/// Adapter for one remote provider's HTTP API.
pub(crate) trait ProviderAdapter: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Production base URL, overridable for tests.
    fn default_base_url(&self) -> &'static str;

    /// Full request URL. Providers that authenticate via query parameter
    /// embed the key here.
    fn endpoint(&self, base_url: &str, api_key: &str) -> String;

    /// Bearer token for providers that authenticate via header.
    fn bearer_token<'k>(&self, api_key: &'k str) -> Option<&'k str>;

    /// Provider-specific request body.
    fn request_body(&self, prompt: &str, system_prompt: &str) -> serde_json::Value;

    /// Pull the single text payload out of a 200 response body.
    /// `None` when the envelope does not have the expected shape.
    fn extract_text(&self, body: &str) -> Option<String>;
}

pub(crate) fn adapter_for(provider: ProviderId) -> Option<&'static dyn ProviderAdapter> {
    match provider {
        ProviderId::OpenAi => Some(&OPENAI),
        ProviderId::Grok => Some(&GROK),
        ProviderId::DeepSeek => Some(&DEEPSEEK),
        ProviderId::Gemini => Some(&GeminiAdapter),
        ProviderId::Internal => None,
    }
}

// ============================================================================
// Chat-completions envelope (OpenAI, Grok, DeepSeek)
// ============================================================================

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'static str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Shared adapter for providers speaking the message-array chat format.
pub(crate) struct ChatCompletionsAdapter {
    id: ProviderId,
    base_url: &'static str,
    model: &'static str,
    temperature: f32,
}

static OPENAI: ChatCompletionsAdapter = ChatCompletionsAdapter {
    id: ProviderId::OpenAi,
    base_url: "https://api.openai.com/v1",
    model: "gpt-3.5-turbo",
    temperature: 0.3,
};

static GROK: ChatCompletionsAdapter = ChatCompletionsAdapter {
    id: ProviderId::Grok,
    base_url: "https://api.grok.x/v1",
    model: "grok-beta",
    temperature: 0.7,
};

static DEEPSEEK: ChatCompletionsAdapter = ChatCompletionsAdapter {
    id: ProviderId::DeepSeek,
    base_url: "https://api.deepseek.com/v1",
    model: "deepseek-chat",
    temperature: 0.7,
};

impl ProviderAdapter for ChatCompletionsAdapter {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn default_base_url(&self) -> &'static str {
        self.base_url
    }

    fn endpoint(&self, base_url: &str, _api_key: &str) -> String {
        format!("{}/chat/completions", base_url)
    }

    fn bearer_token<'k>(&self, api_key: &'k str) -> Option<&'k str> {
        Some(api_key)
    }

    fn request_body(&self, prompt: &str, system_prompt: &str) -> serde_json::Value {
        let mut messages = Vec::with_capacity(2);
        if !system_prompt.is_empty() {
            messages.push(ChatMessage {
                role: "system",
                content: system_prompt,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        serde_json::to_value(ChatRequest {
            model: self.model,
            messages,
            max_tokens: 3000,
            temperature: self.temperature,
        })
        .expect("chat request is always serializable")
    }

    fn extract_text(&self, body: &str) -> Option<String> {
        let parsed: ChatResponse = serde_json::from_str(body).ok()?;
        parsed.choices.into_iter().next().map(|c| c.message.content)
    }
}

// ============================================================================
// Gemini single-content-part envelope
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: [GeminiContent<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: [GeminiPart<'a>; 1],
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: std::borrow::Cow<'a, str>,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: String,
}

/// Gemini authenticates via URL query parameter and wraps the prompt in
/// a single content part. The API has no separate system-prompt slot, so
/// a non-empty system prompt is folded into the text part.
pub(crate) struct GeminiAdapter;

impl ProviderAdapter for GeminiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn default_base_url(&self) -> &'static str {
        "https://generativelanguage.googleapis.com/v1"
    }

    fn endpoint(&self, base_url: &str, api_key: &str) -> String {
        format!("{}/models/gemini-pro:generateContent?key={}", base_url, api_key)
    }

    fn bearer_token<'k>(&self, _api_key: &'k str) -> Option<&'k str> {
        None
    }

    fn request_body(&self, prompt: &str, system_prompt: &str) -> serde_json::Value {
        let text = if system_prompt.is_empty() {
            std::borrow::Cow::Borrowed(prompt)
        } else {
            std::borrow::Cow::Owned(format!("{}\n\n{}", system_prompt, prompt))
        };

        serde_json::to_value(GeminiRequest {
            contents: [GeminiContent {
                parts: [GeminiPart { text }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 8192,
            },
        })
        .expect("gemini request is always serializable")
    }

    fn extract_text(&self, body: &str) -> Option<String> {
        let parsed: GeminiResponse = serde_json::from_str(body).ok()?;
        parsed
            .candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()
            .map(|p| p.text)
    }
}
