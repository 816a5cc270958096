//! HTTP routes for the wikitext endpoint.
//!
//! Routes match on path alone (any method), so e.g. a `GET /wikitext`
//! without a JSON body falls into the malformed-payload 400 path rather
//! than a 405.

use axum::{routing::any, Router};

use super::handlers::{convert_wikitext, not_found, root, wikitext_trailing_slash, WikitextAppState};

/// Creates the router with all endpoints.
pub fn wikitext_router(state: WikitextAppState) -> Router {
    Router::new()
        .route("/", any(root))
        .route("/wikitext", any(convert_wikitext))
        .route("/wikitext/", any(wikitext_trailing_slash))
        .fallback(not_found)
        .with_state(state)
}
