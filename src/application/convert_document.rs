//! Convert-document use case.
//!
//! Orchestrates the full conversion of a wiki document: split the
//! frontmatter, rewrite the first revision comment and the body as
//! Markdown, and reassemble the document.

use std::sync::Arc;

use crate::domain::{ConvertError, Document};
use crate::ports::WikitextConverter;

/// Handler for the convert-document operation.
pub struct ConvertDocumentHandler {
    converter: Arc<dyn WikitextConverter>,
}

impl ConvertDocumentHandler {
    /// Creates a new handler with the given converter.
    pub fn new(converter: Arc<dyn WikitextConverter>) -> Self {
        Self { converter }
    }

    /// Convert a raw `---\n<yaml>\n---\n<wikitext>` document.
    ///
    /// The returned string has the same framing with the body and
    /// `revision[0].comment` rewritten as Markdown; every other metadata
    /// entry passes through unmodified.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` when the framing or YAML is malformed or the
    /// revision comment is absent or not a string.
    pub fn handle(&self, raw: &str) -> Result<String, ConvertError> {
        let mut document = Document::parse(raw)?;

        let comment = document.revision_comment()?.to_string();
        document.set_revision_comment(self.to_block_markdown(&comment))?;

        let body = self.to_block_markdown(&document.body);
        document.assemble(&body)
    }

    /// Two-stage conversion: flatten to plain text first so inline markup
    /// (links, emphasis) is discarded, then re-derive block-level structure
    /// (headings, lists) as Markdown.
    fn to_block_markdown(&self, wikitext: &str) -> String {
        self.converter
            .to_markdown(&self.converter.to_plain_text(wikitext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::wikitext::ParseWikiTextConverter;

    fn handler() -> ConvertDocumentHandler {
        ConvertDocumentHandler::new(Arc::new(ParseWikiTextConverter::new()))
    }

    const SAMPLE: &str =
        "---\ntitle: Page\nrevision:\n  - id: 42\n    comment: '[[Link]] bold'\n---\n==Heading==\n[[Link]] text";

    #[test]
    fn test_convert_produces_markdown_body() {
        let out = handler().handle(SAMPLE).unwrap();
        assert!(out.starts_with("---\n"));
        assert!(out.contains("# Heading"));
        assert!(out.contains("Link text"));
        assert!(!out.contains("[["));
        assert!(!out.contains("]]"));
    }

    #[test]
    fn test_convert_rewrites_revision_comment() {
        let out = handler().handle(SAMPLE).unwrap();
        assert!(out.contains("comment: Link bold"));
    }

    #[test]
    fn test_convert_preserves_other_metadata() {
        let out = handler().handle(SAMPLE).unwrap();
        assert!(out.contains("title: Page"));
        assert!(out.contains("id: 42"));
    }

    #[test]
    fn test_convert_keeps_framing() {
        let out = handler().handle(SAMPLE).unwrap();
        let after_open = &out[4..];
        assert!(after_open.contains("---\n"));
    }

    #[test]
    fn test_convert_rejects_missing_comment() {
        let err = handler().handle("---\ntitle: Page\n---\nbody").unwrap_err();
        assert!(matches!(err, ConvertError::MissingRevisionComment));
    }

    #[test]
    fn test_convert_rejects_plain_text_input() {
        let err = handler().handle("just some text").unwrap_err();
        assert!(matches!(err, ConvertError::MissingFrontmatter));
    }

    #[test]
    fn test_convert_not_idempotent_by_contract() {
        // Converting twice is allowed to differ from converting once;
        // conversion is one-directional. This only pins down that a second
        // pass still succeeds on the converted output.
        let once = handler().handle(SAMPLE).unwrap();
        assert!(handler().handle(&once).is_ok());
    }
}
