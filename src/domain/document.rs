//! Wiki document model.
//!
//! A wiki document is a YAML frontmatter block followed by a wikitext body:
//!
//! ```text
//! ---
//! title: Example
//! revision:
//!   - comment: edit summary
//! ---
//! ==Heading==
//! body text
//! ```
//!
//! Splitting and reassembly preserve every metadata entry except the first
//! revision's comment, which the conversion pipeline rewrites.

use serde_yaml::Value;

use super::error::ConvertError;

const DELIMITER: &str = "---\n";

/// A wiki document split into YAML metadata and a raw text body.
///
/// Ephemeral: constructed from a request payload and dropped once the
/// converted document has been serialized back out.
#[derive(Debug, Clone)]
pub struct Document {
    /// Decoded frontmatter. Always a YAML mapping.
    pub metadata: Value,
    /// Everything after the closing frontmatter delimiter, unmodified.
    pub body: String,
}

impl Document {
    /// Split a raw `---\n<yaml>\n---\n<body>` string into metadata and body.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError` when the frontmatter framing is missing or
    /// unterminated, the YAML does not parse, or it is not a mapping.
    pub fn parse(raw: &str) -> Result<Self, ConvertError> {
        let rest = raw
            .strip_prefix(DELIMITER)
            .ok_or(ConvertError::MissingFrontmatter)?;

        let (yaml, body) = if let Some(body) = rest.strip_prefix(DELIMITER) {
            // Empty frontmatter block: `---\n---\n<body>`
            ("", body)
        } else if let Some(idx) = rest.find("\n---\n") {
            (&rest[..idx + 1], &rest[idx + 5..])
        } else if let Some(yaml) = rest.strip_suffix("\n---") {
            // Closing delimiter at end of input with no trailing newline
            (yaml, "")
        } else {
            return Err(ConvertError::UnterminatedFrontmatter);
        };

        let metadata: Value = serde_yaml::from_str(yaml)?;
        if !metadata.is_mapping() {
            return Err(ConvertError::NotAMapping);
        }

        Ok(Self {
            metadata,
            body: body.to_string(),
        })
    }

    /// Borrow the first revision's comment string.
    pub fn revision_comment(&self) -> Result<&str, ConvertError> {
        self.revision_comment_value(&self.metadata)?
            .as_str()
            .ok_or(ConvertError::NonStringComment)
    }

    /// Replace the first revision's comment, leaving its siblings
    /// (id, timestamp, contributor, ...) untouched.
    pub fn set_revision_comment(&mut self, comment: String) -> Result<(), ConvertError> {
        let slot = self
            .metadata
            .as_mapping_mut()
            .ok_or(ConvertError::NotAMapping)?
            .get_mut(&key("revision"))
            .and_then(Value::as_sequence_mut)
            .and_then(|revisions| revisions.first_mut())
            .and_then(Value::as_mapping_mut)
            .and_then(|revision| revision.get_mut(&key("comment")))
            .ok_or(ConvertError::MissingRevisionComment)?;
        *slot = Value::String(comment);
        Ok(())
    }

    /// Re-encode metadata as YAML and rejoin it with the given body.
    ///
    /// The YAML encoder terminates its output with a newline, which supplies
    /// the line break before the closing delimiter.
    pub fn assemble(&self, body: &str) -> Result<String, ConvertError> {
        let yaml = serde_yaml::to_string(&self.metadata)?;
        Ok(format!("{DELIMITER}{yaml}{DELIMITER}{body}"))
    }

    fn revision_comment_value<'a>(&self, metadata: &'a Value) -> Result<&'a Value, ConvertError> {
        metadata
            .as_mapping()
            .ok_or(ConvertError::NotAMapping)?
            .get(&key("revision"))
            .and_then(Value::as_sequence)
            .and_then(|revisions| revisions.first())
            .and_then(Value::as_mapping)
            .and_then(|revision| revision.get(&key("comment")))
            .ok_or(ConvertError::MissingRevisionComment)
    }
}

fn key(name: &str) -> Value {
    Value::String(name.to_string())
}
