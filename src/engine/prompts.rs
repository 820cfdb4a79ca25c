//! Prompt construction for the remote providers.
//!
//! Every JSON-returning task asks the provider for exactly the
//! normalized result shape, so a well-behaved response deserializes
//! directly into the corresponding `types::result` struct.

pub(crate) const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are an expert SEO analyst with expertise in content optimization and readability \
     analysis. Provide comprehensive analysis in JSON format.";

pub(crate) const OUTLINE_SYSTEM_PROMPT: &str =
    "You are an expert content strategist who creates detailed, SEO-optimized content \
     outlines. Always respond in valid JSON format.";

pub(crate) const KEYWORDS_SYSTEM_PROMPT: &str =
    "You are an expert SEO keyword researcher who identifies semantic keywords, long-tail \
     variations, and LSI keywords. Always respond in valid JSON format.";

pub(crate) const META_SYSTEM_PROMPT: &str =
    "You are an expert copywriter who creates compelling meta descriptions that improve \
     click-through rates. Always respond in valid JSON format.";

pub(crate) const ARTICLE_SYSTEM_PROMPT: &str =
    "You are an expert SEO content writer who creates engaging, informative, and \
     well-structured articles. Output content in clean HTML format.";

pub(crate) fn content_analysis(content: &str, keywords: &[String], context: Option<&str>) -> String {
    let keywords_text = if keywords.is_empty() {
        String::new()
    } else {
        format!("Target keywords: {}\n", keywords.join(", "))
    };
    let context_text = context
        .filter(|c| !c.is_empty())
        .map(|c| format!("Context: {}\n", c))
        .unwrap_or_default();

    format!(
        "Analyze this content comprehensively and provide results in JSON format:\n\n\
         {keywords_text}{context_text}\
         Content:\n{content}\n\n\
         Please provide analysis in the following JSON structure:\n\
         {{\n\
         \x20 \"seo_score\": 0-100,\n\
         \x20 \"readability_score\": 0-100,\n\
         \x20 \"word_count\": 0,\n\
         \x20 \"keyword_density\": {{\"keyword\": \"percentage\"}},\n\
         \x20 \"recommendations\": [\"specific actionable recommendations\"]\n\
         }}"
    )
}

pub(crate) fn content_outline(topic: &str, audience: &str) -> String {
    let audience_text = if audience.is_empty() {
        String::new()
    } else {
        format!(" targeting audience: {}", audience)
    };

    format!(
        "Create a comprehensive content outline for the topic: '{topic}'{audience_text}\n\n\
         Please provide the response in JSON format:\n\
         {{\n\
         \x20 \"title_suggestions\": [\"suggested title 1\", \"suggested title 2\"],\n\
         \x20 \"outline\": [\n\
         \x20   {{\"heading\": \"Main Section 1\", \"subheadings\": [\"Subsection 1.1\"]}}\n\
         \x20 ],\n\
         \x20 \"meta_description\": \"Suggested meta description\"\n\
         }}"
    )
}

pub(crate) fn semantic_keywords(content: &str, primary_keyword: &str) -> String {
    format!(
        "Analyze the following content and generate semantic keywords and variations for \
         the primary keyword: '{primary_keyword}'\n\n\
         Content: {content}\n\n\
         Please provide the response in JSON format:\n\
         {{\n\
         \x20 \"primary_keyword\": \"{primary_keyword}\",\n\
         \x20 \"semantic_keywords\": [\"related keyword 1\", \"related keyword 2\"],\n\
         \x20 \"long_tail_variations\": [\"long tail keyword 1\", \"long tail keyword 2\"],\n\
         \x20 \"lsi_keywords\": [\"LSI keyword 1\", \"LSI keyword 2\"]\n\
         }}"
    )
}

pub(crate) fn meta_description(title: &str, content: &str, keywords: &[String]) -> String {
    let keywords_text = if keywords.is_empty() {
        String::new()
    } else {
        format!("Target keywords: {}\n", keywords.join(", "))
    };
    let summary: String = crate::fallback::strip_markup(content)
        .chars()
        .take(500)
        .collect();

    format!(
        "Generate multiple compelling meta descriptions for the following content:\n\n\
         Title: {title}\n\
         {keywords_text}\n\
         Content summary: {summary}...\n\n\
         Requirements:\n\
         - 150-160 characters each\n\
         - Include primary keywords naturally\n\
         - Compelling and click-worthy\n\
         - Accurately describe the content\n\n\
         Please provide the response in JSON format:\n\
         {{\n\
         \x20 \"variations\": [\n\
         \x20   {{\"description\": \"Meta description variation 1\", \"character_count\": 155}}\n\
         \x20 ]\n\
         }}"
    )
}
