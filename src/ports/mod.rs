//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The only external capability this service needs is wikitext rendering:
//!
//! - `WikitextConverter` - Render wikitext to plain text or Markdown

mod wikitext_converter;

pub use wikitext_converter::WikitextConverter;
