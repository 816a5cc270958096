//! Wikitext-MD - Local wikitext to Markdown conversion service.
//!
//! This crate exposes a small HTTP endpoint that accepts wiki documents
//! (YAML frontmatter followed by a MediaWiki-markup body) and returns the
//! same document with the body and the first revision comment rewritten
//! as Markdown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
