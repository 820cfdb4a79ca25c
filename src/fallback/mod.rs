//! Deterministic local fallback analyzer.
//!
//! Produces the same logical outputs as the remote providers — scores,
//! outlines, keyword expansions, meta descriptions, article bodies —
//! from pure string heuristics. No network, no randomness, no failure
//! mode: every function here is total.
//!
//! The façade dispatches to these typed entry points directly (one
//! function per task) rather than sniffing intent out of an opaque
//! prompt string, so the set of supported tasks is closed and visible
//! in the signatures.

mod analysis;
mod generate;

pub use analysis::{
    content_analysis, readability_score, recommendations, sentence_count, seo_score,
    strip_markup, word_count,
};
pub use generate::{article_html, content_outline, keyword_set, meta_descriptions};
