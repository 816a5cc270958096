//! Wikitext adapter - `parse_wiki_text` backed implementation of the
//! `WikitextConverter` port.
//!
//! Conversion to Markdown is deliberately two-staged at the call site:
//! callers first flatten a document with `to_plain_text` (which drops inline
//! markup but keeps block-level wikitext markers), then re-render the result
//! with `to_markdown`. A single direct `to_markdown` call keeps inline links
//! and emphasis in the output.

mod markdown;
mod plain;

use parse_wiki_text::Configuration;

use crate::ports::WikitextConverter;

/// `WikitextConverter` implementation on top of the `parse_wiki_text` crate.
///
/// The parser configuration is rebuilt per call; it is cheap and keeps the
/// adapter trivially `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct ParseWikiTextConverter;

impl ParseWikiTextConverter {
    /// Creates a new converter for plain wikis (no extension markup).
    pub fn new() -> Self {
        Self
    }
}

impl WikitextConverter for ParseWikiTextConverter {
    fn to_plain_text(&self, wikitext: &str) -> String {
        let parsed = Configuration::default().parse(wikitext);
        if !parsed.warnings.is_empty() {
            tracing::debug!(warnings = parsed.warnings.len(), "wikitext parsed with warnings");
        }
        normalize(&plain::render(&parsed.nodes))
    }

    fn to_markdown(&self, wikitext: &str) -> String {
        let parsed = Configuration::default().parse(wikitext);
        if !parsed.warnings.is_empty() {
            tracing::debug!(warnings = parsed.warnings.len(), "wikitext parsed with warnings");
        }
        normalize(&markdown::render(&parsed.nodes))
    }
}

/// Collapse runs of three or more newlines to a single blank line and trim
/// the outer edges of the rendered text.
fn normalize(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut newlines = 0usize;
    for ch in rendered.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }
    out.trim_matches('\n').trim_end().to_string()
}
