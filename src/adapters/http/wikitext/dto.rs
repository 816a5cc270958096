//! Request DTOs for the wikitext endpoint.

use serde::Deserialize;

/// Body of `POST /wikitext`.
///
/// `content` must be a string; any other JSON shape fails deserialization
/// and yields the fixed 400 payload.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Full wiki document: YAML frontmatter followed by a wikitext body.
    pub content: String,
}
