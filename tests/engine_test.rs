//! Integration tests for the engine façade.
//!
//! These tests exercise the full dispatch path against a wiremock
//! provider: remote success and normalization, cache idempotence, the
//! hourly quota short-circuit, degradation to the local analyzer, and
//! the diagnostics surface.

use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seoforge::{EngineError, ProviderId, RetryPolicy, SeoForge};

/// Engine wired to a mock OpenAI endpoint with retry delays collapsed.
fn mock_engine(server: &MockServer) -> seoforge::Engine {
    SeoForge::builder()
        .openai_key("test-key")
        .endpoint_override(ProviderId::OpenAi, server.uri())
        .retry_policy(
            RetryPolicy::new()
                .transport_delay(Duration::from_millis(1))
                .rate_limit_delay(Duration::from_millis(1)),
        )
        .build()
}

/// Chat-completions envelope around an assistant message body.
fn chat_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

// ============================================================================
// Remote success and normalization
// ============================================================================

#[tokio::test]
async fn remote_analysis_is_parsed_and_returned() {
    let server = MockServer::start().await;
    let payload = r#"{"seo_score": 88, "readability_score": 72, "word_count": 640,
        "keyword_density": {"rust": "1.50%"},
        "recommendations": ["Add internal links"]}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let analysis = engine
        .analyze_content("Some body text about Rust.", &["rust".to_string()], None)
        .await
        .unwrap();

    assert_eq!(analysis.seo_score, 88);
    assert_eq!(analysis.readability_score, 72);
    assert_eq!(analysis.word_count, 640);
    assert_eq!(analysis.keyword_density["rust"], "1.50%");
    assert_eq!(analysis.recommendations, vec!["Add internal links"]);
}

#[tokio::test]
async fn fenced_json_response_is_extracted() {
    let server = MockServer::start().await;
    let body = "Here is the analysis:\n```json\n{\"seo_score\": 77}\n```\nLet me know!";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(body)))
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let analysis = engine
        .analyze_content("Some body text.", &[], None)
        .await
        .unwrap();

    // explicit field parsed, everything else defaulted
    assert_eq!(analysis.seo_score, 77);
    assert_eq!(analysis.word_count, 0);
    assert!(analysis.recommendations.is_empty());
}

#[tokio::test]
async fn outline_request_carries_system_prompt() {
    let server = MockServer::start().await;
    let payload = r#"{"title_suggestions": ["T1"], "outline": [], "meta_description": "M"}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "system"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let outline = engine
        .generate_content_outline("Widgets", "beginners")
        .await
        .unwrap();

    assert_eq!(outline.title_suggestions, vec!["T1"]);
    assert_eq!(outline.meta_description, "M");
}

#[tokio::test]
async fn article_content_is_returned_verbatim() {
    let server = MockServer::start().await;
    let html = "<h2>Rust at Scale</h2>\n<p>Body.</p>";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(html)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let article = engine
        .generate_article_content("Write about Rust at scale")
        .await
        .unwrap();

    assert_eq!(article, html);
}

// ============================================================================
// Cache idempotence
// ============================================================================

#[tokio::test]
async fn identical_request_is_served_from_cache() {
    let server = MockServer::start().await;
    let payload = r#"{"primary_keyword": "seo", "semantic_keywords": ["seo tips"],
        "long_tail_variations": [], "lsi_keywords": []}"#;

    // exactly one upstream call for two identical requests
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let first = engine
        .analyze_semantic_keywords("content body", "seo")
        .await
        .unwrap();
    let second = engine
        .analyze_semantic_keywords("content body", "seo")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.semantic_keywords, vec!["seo tips"]);
}

#[tokio::test]
async fn changed_input_misses_the_cache() {
    let server = MockServer::start().await;
    let payload = r#"{"variations": [{"description": "D", "character_count": 1}]}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(2)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    engine
        .generate_meta_description("Title A", "content", &[])
        .await
        .unwrap();
    engine
        .generate_meta_description("Title B", "content", &[])
        .await
        .unwrap();
}

// ============================================================================
// Quota short-circuit
// ============================================================================

#[tokio::test]
async fn exhausted_quota_degrades_without_a_remote_call() {
    let server = MockServer::start().await;
    let payload = r#"{"title_suggestions": ["Remote"], "outline": [], "meta_description": "M"}"#;

    // the second request must never reach the wire
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = SeoForge::builder()
        .openai_key("test-key")
        .endpoint_override(ProviderId::OpenAi, server.uri())
        .max_requests_per_hour(1)
        .build();

    let remote = engine.generate_content_outline("Alpha", "").await.unwrap();
    assert_eq!(remote.title_suggestions, vec!["Remote"]);
    assert_eq!(engine.usage(ProviderId::OpenAi), 1);

    let local = engine.generate_content_outline("Beta", "").await.unwrap();
    assert_eq!(local.title_suggestions[0], "Complete Guide to Beta");
    assert_eq!(engine.usage(ProviderId::OpenAi), 1);
}

#[tokio::test]
async fn reset_usage_reopens_the_quota() {
    let server = MockServer::start().await;
    let payload = r#"{"primary_keyword": "k", "semantic_keywords": [],
        "long_tail_variations": [], "lsi_keywords": []}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(2)
        .mount(&server)
        .await;

    let engine = SeoForge::builder()
        .openai_key("test-key")
        .endpoint_override(ProviderId::OpenAi, server.uri())
        .max_requests_per_hour(1)
        .build();

    engine.analyze_semantic_keywords("a", "k").await.unwrap();
    assert_eq!(engine.usage(ProviderId::OpenAi), 1);

    engine.reset_usage();
    assert_eq!(engine.usage(ProviderId::OpenAi), 0);

    engine.analyze_semantic_keywords("b", "k").await.unwrap();
    assert_eq!(engine.usage(ProviderId::OpenAi), 1);
}

// ============================================================================
// Degradation to the local analyzer
// ============================================================================

#[tokio::test]
async fn api_error_falls_back_to_local_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {"message": "upstream exploded"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let analysis = engine
        .analyze_content(
            "One sentence of reasonable length here. And a second one follows it.",
            &["sentence".to_string()],
            None,
        )
        .await
        .unwrap();

    // the local analyzer computed a real word count
    assert_eq!(analysis.word_count, 12);
    assert!(analysis.keyword_density.contains_key("sentence"));
}

#[tokio::test]
async fn unparsable_response_falls_back_to_local_analysis() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(
            "I am sorry, I cannot produce JSON today.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let outline = engine
        .generate_content_outline("Gardening", "")
        .await
        .unwrap();

    assert_eq!(outline.title_suggestions[0], "Complete Guide to Gardening");
    assert_eq!(outline.outline.len(), 5);
}

#[tokio::test]
async fn rate_limit_is_retried_then_succeeds() {
    let server = MockServer::start().await;
    let payload = r#"{"seo_score": 61}"#;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let analysis = engine
        .analyze_content("body text", &[], None)
        .await
        .unwrap();

    assert_eq!(analysis.seo_score, 61);
}

#[tokio::test]
async fn no_credentials_means_fully_local_operation() {
    let engine = SeoForge::builder().build();

    let analysis = engine.analyze_content("", &[], None).await.unwrap();
    assert_eq!(analysis.word_count, 0);
    assert!(analysis.recommendations[0].contains("at least 300 words"));

    let keywords = engine
        .analyze_semantic_keywords("", "content marketing")
        .await
        .unwrap();
    assert_eq!(keywords.semantic_keywords[0], "content marketing tips");

    let article = engine
        .generate_article_content("Article Title: Composting\nTone: casual")
        .await
        .unwrap();
    assert!(article.contains("<h2>Introduction to Composting</h2>"));
}

// ============================================================================
// Input validation
// ============================================================================

#[tokio::test]
async fn empty_required_inputs_are_rejected() {
    let engine = SeoForge::builder().build();

    assert!(matches!(
        engine.generate_content_outline("  ", "devs").await,
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.analyze_semantic_keywords("content", "").await,
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.generate_meta_description("", "content", &[]).await,
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.generate_article_content("\n").await,
        Err(EngineError::InvalidInput(_))
    ));
}

// ============================================================================
// Diagnostics
// ============================================================================

#[tokio::test]
async fn provider_status_reflects_credentials() {
    let engine = SeoForge::builder()
        .gemini_key("g-key")
        .preferred_provider(ProviderId::OpenAi)
        .build();

    let report = engine.provider_status();
    // preference has no key, so gemini wins the fallthrough
    assert_eq!(report.active_provider, ProviderId::Gemini);
    assert_eq!(report.providers.len(), 5);

    for status in &report.providers {
        match status.id {
            ProviderId::Internal | ProviderId::Gemini => assert!(status.available),
            _ => assert!(!status.available),
        }
        assert_eq!(status.is_active, status.id == ProviderId::Gemini);
    }
}

#[tokio::test]
async fn test_connection_reports_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("OK")))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let reply = engine.test_connection(ProviderId::OpenAi).await.unwrap();
    assert_eq!(reply, "OK");
}

#[tokio::test]
async fn test_connection_surfaces_auth_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "Invalid API key provided"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = mock_engine(&server);
    let err = engine.test_connection(ProviderId::OpenAi).await.unwrap_err();
    match err {
        EngineError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key provided");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_without_credential_fails_fast() {
    let engine = SeoForge::builder().build();
    let err = engine.test_connection(ProviderId::Grok).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::MissingCredential(ProviderId::Grok)
    ));
}

#[tokio::test]
async fn test_connection_to_internal_always_succeeds() {
    let engine = SeoForge::builder().build();
    let reply = engine.test_connection(ProviderId::Internal).await.unwrap();
    assert!(reply.contains("always available"));
}
