//! HTTP adapter for the wikitext conversion endpoint.

mod dto;
mod handlers;
mod routes;

pub use handlers::WikitextAppState;
pub use routes::wikitext_router;
