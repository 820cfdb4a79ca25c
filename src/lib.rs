//! SeoForge - provider-dispatching engine for SEO content tasks
//!
//! This crate routes SEO content work — analysis, outlines, keyword
//! research, meta descriptions, article generation — to the best
//! available LLM provider, and degrades to a deterministic local
//! analyzer when no provider is usable. Callers always get a result;
//! the only surfaced errors are invalid inputs and explicit
//! connection diagnostics.
//!
//! # Example
//!
//! ```rust,no_run
//! use seoforge::{ProviderId, SeoForge};
//!
//! #[tokio::main]
//! async fn main() -> seoforge::Result<()> {
//!     let engine = SeoForge::builder()
//!         .openai_key("sk-your-key")
//!         .preferred_provider(ProviderId::OpenAi)
//!         .max_requests_per_hour(100)
//!         .build();
//!
//!     let analysis = engine
//!         .analyze_content(
//!             "<h2>Ferris at work</h2><p>Rust makes systems fun...</p>",
//!             &["rust".to_string()],
//!             None,
//!         )
//!         .await?;
//!
//!     println!("SEO score: {}", analysis.seo_score);
//!     Ok(())
//! }
//! ```
//!
//! With no credentials configured the engine is still fully
//! functional: every task is served by the local analyzer.

mod cache;
mod config;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod providers;
pub mod telemetry;
pub mod types;
mod usage;

// Re-export main types at crate root
pub use cache::CacheConfig;
pub use config::{Credentials, EngineConfig};
pub use engine::{Engine, SeoForge, SeoForgeBuilder};
pub use error::{EngineError, Result};
pub use providers::RetryPolicy;

// Re-export all result and status types
pub use types::{
    ContentAnalysis, ContentOutline, KeywordSet, MetaDescriptionSet, MetaVariation,
    OutlineSection, ProviderId, ProviderStatus, StatusReport, ALL_PROVIDERS, FALLBACK_PRIORITY,
};
