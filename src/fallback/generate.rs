//! Deterministic generation: outlines, keywords, meta descriptions and
//! article bodies built from fixed templates with topic interpolation.

use crate::fallback::analysis::strip_markup;
use crate::types::{ContentOutline, KeywordSet, MetaDescriptionSet, MetaVariation, OutlineSection};

/// Meta descriptions are bounded to this many characters.
const META_DESCRIPTION_LIMIT: usize = 160;

/// Templated content outline for a topic, optionally tailored to an
/// audience string. Always the same five sections in the same order.
pub fn content_outline(topic: &str, audience: &str) -> ContentOutline {
    let audience_text = if audience.is_empty() {
        String::new()
    } else {
        format!(" for {}", audience)
    };

    ContentOutline {
        title_suggestions: vec![
            format!("Complete Guide to {}", topic),
            format!("Everything You Need to Know About {}", topic),
            format!("The Ultimate {} Guide{}", topic, audience_text),
            format!("Mastering {}: A Comprehensive Overview", topic),
            format!("{} Explained: Tips and Best Practices", topic),
        ],
        outline: vec![
            OutlineSection {
                heading: format!("Introduction to {}", topic),
                subheadings: vec![
                    format!("What is {}?", topic),
                    format!("Why {} matters", topic),
                    "Key benefits and applications".to_string(),
                ],
            },
            OutlineSection {
                heading: format!("Getting Started with {}", topic),
                subheadings: vec![
                    "Basic concepts and terminology".to_string(),
                    "Essential tools and resources".to_string(),
                    "Common challenges and solutions".to_string(),
                ],
            },
            OutlineSection {
                heading: format!("Best Practices for {}", topic),
                subheadings: vec![
                    "Industry standards and guidelines".to_string(),
                    "Expert tips and recommendations".to_string(),
                    "Common mistakes to avoid".to_string(),
                ],
            },
            OutlineSection {
                heading: format!("Advanced {} Techniques", topic),
                subheadings: vec![
                    "Advanced strategies and methods".to_string(),
                    "Case studies and examples".to_string(),
                    "Future trends and developments".to_string(),
                ],
            },
            OutlineSection {
                heading: "Conclusion".to_string(),
                subheadings: vec![
                    "Key takeaways".to_string(),
                    "Next steps and recommendations".to_string(),
                    "Additional resources".to_string(),
                ],
            },
        ],
        meta_description: clamp_description(&format!(
            "Comprehensive guide to {}{}. Learn best practices, expert tips, and advanced \
             techniques to master {} effectively.",
            topic, audience_text, topic
        )),
    }
}

/// Deterministic keyword expansion from fixed suffix/prefix templates.
/// Same input, same list, same order.
pub fn keyword_set(primary_keyword: &str) -> KeywordSet {
    let k = primary_keyword.trim();

    KeywordSet {
        primary_keyword: k.to_string(),
        semantic_keywords: vec![
            format!("{} tips", k),
            format!("{} guide", k),
            format!("best {}", k),
            format!("how to {}", k),
            format!("{} examples", k),
        ],
        long_tail_variations: vec![
            format!("{} strategies", k),
            format!("{} tools", k),
            format!("improve {}", k),
            format!("{} benefits", k),
            format!("{} vs traditional methods", k),
        ],
        lsi_keywords: vec![
            format!("{} best practices", k),
            format!("{} checklist", k),
            format!("{} optimization", k),
        ],
    }
}

/// Three templated meta-description variations, each bounded to 160
/// characters with an accurate character count.
pub fn meta_descriptions(title: &str, content: &str, keywords: &[String]) -> MetaDescriptionSet {
    let base_description = first_meaningful_sentence(content)
        .unwrap_or_else(|| format!("Learn about {} with our comprehensive guide", title));

    let keyword_text = if keywords.is_empty() {
        String::new()
    } else {
        let listed: Vec<&str> = keywords.iter().take(3).map(String::as_str).collect();
        format!(". Covers {}", listed.join(", "))
    };

    let candidates = [
        format!(
            "{}{}. Expert insights and practical tips.",
            base_description, keyword_text
        ),
        format!(
            "Looking for information about {}? Discover everything you need to know{} in \
             this detailed guide.",
            title, keyword_text
        ),
        format!(
            "Complete guide to {}. Get expert tips, best practices{} to achieve better \
             results.",
            title, keyword_text
        ),
    ];

    MetaDescriptionSet {
        variations: candidates
            .into_iter()
            .map(|c| {
                let description = clamp_description(&c);
                MetaVariation {
                    character_count: description.chars().count(),
                    description,
                }
            })
            .collect(),
    }
}

/// Templated article body in clean HTML, interpolating the topic and
/// any keywords. The remote path returns provider-written HTML; this is
/// its offline stand-in.
pub fn article_html(topic: &str, keywords: &[String]) -> String {
    let mut html = String::new();

    html.push_str(&format!("<h2>Introduction to {}</h2>\n", topic));
    html.push_str(&format!(
        "<p>Welcome to this comprehensive guide about {}. In this article, we'll explore \
         the key aspects of this topic and provide valuable insights to help you \
         understand it better.</p>\n",
        topic
    ));

    if !keywords.is_empty() {
        let listed: Vec<&str> = keywords.iter().map(String::as_str).collect();
        html.push_str(&format!(
            "<p>When it comes to {}, there are several important factors to consider. \
             Let's dive into the details.</p>\n",
            listed.join(" and ")
        ));
    }

    html.push_str("<h2>Key Points to Understand</h2>\n");
    html.push_str(
        "<p>The most important aspects of this topic include understanding the \
         fundamentals, applying best practices, and staying updated with the latest \
         trends.</p>\n",
    );

    html.push_str("<h3>1. Understanding the Basics</h3>\n");
    html.push_str(
        "<p>To fully grasp this subject, it's essential to start with the foundational \
         concepts. This provides a solid base for more advanced knowledge.</p>\n",
    );

    html.push_str("<h3>2. Best Practices for Success</h3>\n");
    html.push_str(
        "<p>Following industry best practices can significantly improve your results. \
         These time-tested approaches have proven effective in various scenarios.</p>\n",
    );

    html.push_str("<h3>3. Latest Trends and Developments</h3>\n");
    html.push_str(
        "<p>Staying current with emerging trends is crucial in today's fast-changing \
         environment. Being aware of recent developments gives you a competitive \
         advantage.</p>\n",
    );

    html.push_str("<h2>Conclusion</h2>\n");
    html.push_str(&format!(
        "<p>In conclusion, {} is a fascinating subject with many important applications. \
         By understanding the core concepts and following best practices, you can achieve \
         excellent results.</p>\n",
        topic
    ));

    html
}

/// First `.!?`-delimited sentence longer than 20 characters, if any.
fn first_meaningful_sentence(content: &str) -> Option<String> {
    strip_markup(content)
        .split(['.', '!', '?'])
        .map(str::trim)
        .find(|s| s.len() > 20)
        .map(str::to_string)
}

/// Truncate to the meta-description limit on a character boundary.
fn clamp_description(s: &str) -> String {
    if s.chars().count() <= META_DESCRIPTION_LIMIT {
        s.to_string()
    } else {
        s.chars().take(META_DESCRIPTION_LIMIT).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_interpolates_topic_everywhere() {
        let o = content_outline("Widgets", "");
        assert_eq!(o.title_suggestions.len(), 5);
        assert_eq!(o.outline.len(), 5);
        assert_eq!(o.outline[0].heading, "Introduction to Widgets");
        assert_eq!(o.outline[0].subheadings[0], "What is Widgets?");
        assert!(o.meta_description.contains("Widgets"));
    }

    #[test]
    fn outline_mentions_audience_when_given() {
        let o = content_outline("Widgets", "beginners");
        assert!(o.title_suggestions[2].ends_with("for beginners"));
        assert!(o.meta_description.contains("for beginners"));
    }

    #[test]
    fn keyword_expansion_is_stable() {
        let a = keyword_set("link building");
        let b = keyword_set("link building");
        assert_eq!(a, b);
        assert_eq!(a.semantic_keywords[0], "link building tips");
        assert_eq!(a.semantic_keywords.len(), 5);
        assert_eq!(a.long_tail_variations.len(), 5);
        assert_eq!(
            a.long_tail_variations[4],
            "link building vs traditional methods"
        );
        assert!(!a.lsi_keywords.is_empty());
    }

    #[test]
    fn meta_variations_are_bounded_to_160() {
        let long_title = "An Exceptionally Long Title About Search Engine Optimization \
                          Strategies For Modern Content Teams Working At Scale";
        let set = meta_descriptions(long_title, "", &["seo".to_string()]);
        assert_eq!(set.variations.len(), 3);
        for v in &set.variations {
            assert!(v.description.chars().count() <= 160);
            assert_eq!(v.character_count, v.description.chars().count());
        }
    }

    #[test]
    fn meta_uses_first_meaningful_sentence() {
        let content = "Hi. This opening sentence is long enough to be used. More text.";
        let set = meta_descriptions("Title", content, &[]);
        assert!(set.variations[0]
            .description
            .starts_with("This opening sentence is long enough to be used"));
    }

    #[test]
    fn meta_falls_back_to_title_template_for_thin_content() {
        let set = meta_descriptions("Widgets", "Short.", &[]);
        assert!(set.variations[0].description.starts_with("Learn about Widgets"));
    }

    #[test]
    fn meta_lists_at_most_three_keywords() {
        let keywords: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let set = meta_descriptions("T", "", &keywords);
        assert!(set.variations[0].description.contains("Covers a, b, c"));
        assert!(!set.variations[0].description.contains(", d"));
    }

    #[test]
    fn article_contains_structure_and_topic() {
        let html = article_html("Rust", &["ownership".to_string()]);
        assert!(html.contains("<h2>Introduction to Rust</h2>"));
        assert!(html.contains("<h3>1. Understanding the Basics</h3>"));
        assert!(html.contains("<h2>Conclusion</h2>"));
        assert!(html.contains("ownership"));
        // deterministic
        assert_eq!(html, article_html("Rust", &["ownership".to_string()]));
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        let multibyte = "é".repeat(400);
        let clamped = clamp_description(&multibyte);
        assert_eq!(clamped.chars().count(), 160);
    }
}
