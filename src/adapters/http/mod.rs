//! HTTP adapters - REST API implementations.

pub mod wikitext;

// Re-export key types for convenience
pub use wikitext::wikitext_router;
pub use wikitext::WikitextAppState;
