//! Wikitext Converter Port - markup rendering interface.
//!
//! The conversion pipeline never inspects wikitext itself; it goes through
//! this trait, and an adapter supplies the actual parser.

/// Port for rendering wikitext into other text formats.
///
/// # Contract
///
/// Both operations are total: unparseable constructs degrade to their raw
/// text rather than failing, so implementations return plain `String`s.
/// Implementations must be stateless with respect to calls (no shared
/// mutable state), since handlers invoke them concurrently.
pub trait WikitextConverter: Send + Sync {
    /// Render wikitext as plain text.
    ///
    /// Inline markup (wiki links, external links, emphasis, templates,
    /// references) is flattened to its display text, while block-level
    /// wikitext markers (headings, list items) are preserved so the result
    /// can be fed back through [`to_markdown`](Self::to_markdown).
    fn to_plain_text(&self, wikitext: &str) -> String;

    /// Render wikitext as Markdown.
    ///
    /// Block structure maps to Markdown equivalents (`==Heading==` to
    /// `# Heading`, `*` items to `-` items); inline markup is kept in its
    /// Markdown form. Call this on the output of
    /// [`to_plain_text`](Self::to_plain_text) to obtain Markdown with block
    /// structure only.
    fn to_markdown(&self, wikitext: &str) -> String;
}
