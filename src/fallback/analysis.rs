//! Deterministic content analysis: the offline scoring path.
//!
//! Pure string/regex-free heuristics — no network, no randomness, no
//! failure mode. Same input always yields the same scores, which is what
//! makes these results safe to substitute for a remote provider.

use std::collections::BTreeMap;

use crate::types::ContentAnalysis;

/// Strip `<...>` markup, leaving the text content.
///
/// A deliberately simple scanner: everything between `<` and the next
/// `>` is dropped. Unterminated tags swallow the remainder, matching
/// the permissive behaviour expected of a scoring heuristic.
pub fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // keep words on both sides of a tag separated
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Whitespace-delimited token count of the markup-stripped content.
pub fn word_count(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

/// Count of non-empty segments split on `.`, `!`, `?`.
pub fn sentence_count(content: &str) -> usize {
    strip_markup(content)
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Full deterministic content analysis.
pub fn content_analysis(content: &str, keywords: &[String]) -> ContentAnalysis {
    let words = word_count(content);
    let sentences = sentence_count(content);
    let avg_sentence_len = if sentences > 0 {
        words as f64 / sentences as f64
    } else {
        0.0
    };

    ContentAnalysis {
        seo_score: seo_score(words, avg_sentence_len, content),
        readability_score: readability_score(avg_sentence_len, sentences),
        word_count: words,
        keyword_density: keyword_density(content, words, keywords),
        recommendations: recommendations(words, avg_sentence_len, content),
    }
}

/// Heuristic SEO score: base 50, adjusted for length, sentence length
/// and structure markup, clamped to 0–100.
pub fn seo_score(words: usize, avg_sentence_len: f64, content: &str) -> u8 {
    let mut score: i32 = 50;

    // Word count factor
    if words < 300 {
        score -= 10;
    } else if words < 600 {
        score += 10;
    } else if words < 1000 {
        score += 15;
    } else if words < 1500 {
        score += 20;
    } else {
        score += 25;
    }

    // Sentence length factor
    if avg_sentence_len > 30.0 {
        score -= 10;
    } else if avg_sentence_len > 25.0 {
        score -= 5;
    } else if (15.0..=20.0).contains(&avg_sentence_len) {
        score += 10;
    }

    // Structure factor
    if content.contains("<h2") || content.contains("<h3") {
        score += 10;
    }
    if content.contains("<ul") || content.contains("<ol") {
        score += 5;
    }
    if content.contains("<img") {
        score += 5;
    }

    score.clamp(0, 100) as u8
}

/// Readability from average words-per-sentence, as a fixed step function.
///
/// This is the simplified step scale, not a Flesch formula; it maps long
/// sentences to low scores and short ones to high scores. Zero sentences
/// scores zero.
pub fn readability_score(avg_sentence_len: f64, sentences: usize) -> u8 {
    if sentences == 0 {
        return 0;
    }
    if avg_sentence_len > 30.0 {
        30
    } else if avg_sentence_len > 25.0 {
        45
    } else if avg_sentence_len > 20.0 {
        60
    } else if avg_sentence_len > 15.0 {
        75
    } else if avg_sentence_len > 10.0 {
        85
    } else {
        95
    }
}

fn keyword_density(
    content: &str,
    words: usize,
    keywords: &[String],
) -> BTreeMap<String, String> {
    let content_lower = content.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .map(|keyword| {
            let keyword = keyword.to_lowercase();
            let count = content_lower.matches(&keyword).count();
            let density = if words > 0 {
                (count as f64 / words as f64) * 100.0
            } else {
                0.0
            };
            (keyword, format!("{:.2}%", density))
        })
        .collect()
}

/// Ordered improvement suggestions: one per unmet heuristic condition,
/// then generic tips, truncated to five.
pub fn recommendations(words: usize, avg_sentence_len: f64, content: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    if words < 300 {
        suggestions.push(
            "Increase content length to at least 300 words for better SEO performance."
                .to_string(),
        );
    }
    if avg_sentence_len > 25.0 {
        suggestions.push(
            "Break down longer sentences to improve readability. Aim for an average of \
             15-20 words per sentence."
                .to_string(),
        );
    }
    if !content.contains("<h2") && !content.contains("<h3") {
        suggestions.push(
            "Add subheadings (H2, H3) to structure your content and improve readability."
                .to_string(),
        );
    }
    if !content.contains("<ul") && !content.contains("<ol") {
        suggestions.push(
            "Include bullet points or numbered lists to break up text and highlight \
             important information."
                .to_string(),
        );
    }
    if !content.contains("<img") {
        suggestions.push(
            "Add relevant images with descriptive alt text to enhance engagement and \
             accessibility."
                .to_string(),
        );
    }

    suggestions.push(
        "Ensure your primary keyword appears in the title, first paragraph, and at least \
         one subheading."
            .to_string(),
    );
    suggestions.push("Include a clear call-to-action (CTA) at the end of your content.".to_string());
    suggestions.push("Add internal links to other relevant content on your website.".to_string());

    suggestions.truncate(5);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_counts_words() {
        let content = "<h2>Title here</h2><p>Two more words.</p>";
        assert_eq!(word_count(content), 5);
    }

    #[test]
    fn sentence_count_ignores_empty_segments() {
        assert_eq!(sentence_count("One. Two! Three? "), 3);
        assert_eq!(sentence_count("Trailing dots..."), 1);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn seo_score_rewards_long_content_with_headings() {
        // 1600 words, avg 18 words/sentence, heading present:
        // 50 + 25 + 10 + 10 = 95
        let content = "<h2>Heading</h2>";
        assert_eq!(seo_score(1600, 18.0, content), 95);
    }

    #[test]
    fn seo_score_short_content_penalized() {
        // 50 - 10 (short), no structure
        assert_eq!(seo_score(100, 12.0, "plain text"), 40);
    }

    #[test]
    fn seo_score_clamped_to_100() {
        let content = "<h2>x</h2><ul><li>y</li></ul><img src='z'>";
        // 50 + 25 + 10 + 10 + 5 + 5 = 105 -> 100
        assert_eq!(seo_score(2000, 17.0, content), 100);
    }

    #[test]
    fn readability_steps() {
        assert_eq!(readability_score(31.0, 5), 30);
        assert_eq!(readability_score(26.0, 5), 45);
        assert_eq!(readability_score(21.0, 5), 60);
        assert_eq!(readability_score(16.0, 5), 75);
        assert_eq!(readability_score(11.0, 5), 85);
        assert_eq!(readability_score(8.0, 5), 95);
        assert_eq!(readability_score(0.0, 0), 0);
    }

    #[test]
    fn analysis_is_deterministic_and_well_formed() {
        let content = "Rust is fast. Rust is safe. Memory safety without garbage collection.";
        let keywords = vec!["rust".to_string()];
        let a = content_analysis(content, &keywords);
        let b = content_analysis(content, &keywords);
        assert_eq!(a, b);
        assert!(a.seo_score <= 100);
        assert!(a.readability_score <= 100);
        assert_eq!(a.word_count, 11);
        assert!(a.recommendations.len() <= 5);
        assert_eq!(a.keyword_density["rust"], "18.18%");
    }

    #[test]
    fn empty_content_yields_zero_counts_and_short_warning() {
        let a = content_analysis("", &[]);
        assert_eq!(a.word_count, 0);
        assert!(!a.recommendations.is_empty());
        assert!(a.recommendations[0].contains("at least 300 words"));
    }

    #[test]
    fn recommendations_truncated_to_five() {
        // every condition unmet: 5 conditional + 3 generic -> 5 kept
        let recs = recommendations(10, 40.0, "no markup at all");
        assert_eq!(recs.len(), 5);
        assert!(recs[0].contains("300 words"));
        assert!(recs[1].contains("longer sentences"));
    }
}
