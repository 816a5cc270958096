//! Error types for document conversion.

use thiserror::Error;

/// Errors that occur while converting a wiki document.
///
/// Every variant is a malformed-input condition; the HTTP boundary maps
/// all of them to a 400 response.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Document does not start with a `---` frontmatter block")]
    MissingFrontmatter,

    #[error("Frontmatter block is not terminated by a `---` line")]
    UnterminatedFrontmatter,

    #[error("Frontmatter is not valid YAML: {0}")]
    InvalidMetadata(#[from] serde_yaml::Error),

    #[error("Frontmatter must decode to a YAML mapping")]
    NotAMapping,

    #[error("Metadata has no `revision[0].comment` field")]
    MissingRevisionComment,

    #[error("`revision[0].comment` is not a string")]
    NonStringComment,
}
