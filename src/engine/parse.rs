//! Best-effort JSON extraction from remote responses.
//!
//! Providers asked for JSON sometimes wrap it in prose or a fenced
//! markdown block. The policy: try the whole body as JSON, then look
//! for a ```json fence, then give up (the caller degrades to the local
//! analyzer). No schema validation happens here.

/// Extract a JSON value from a remote text payload.
pub(crate) fn response_json(text: &str) -> Option<serde_json::Value> {
    if let Ok(value) = serde_json::from_str(text.trim()) {
        return Some(value);
    }
    fenced_json(text).and_then(|block| serde_json::from_str(block).ok())
}

/// The contents of the first ```json fenced block, if any.
fn fenced_json(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}
