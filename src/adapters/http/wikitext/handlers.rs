//! HTTP handlers for the wikitext endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};

use crate::application::ConvertDocumentHandler;

use super::dto::ConvertRequest;

/// Fixed body for every 400 response, regardless of which stage failed.
const MALFORMED_PAYLOAD: &str = "Malformed json payload";

/// Application state for the wikitext endpoint.
#[derive(Clone)]
pub struct WikitextAppState {
    /// Convert-document use case (injected)
    pub convert: Arc<ConvertDocumentHandler>,
}

/// Health root.
///
/// `GET /` - 200 with an empty body.
pub async fn root() -> StatusCode {
    StatusCode::OK
}

/// Convert a wiki document.
///
/// `POST /wikitext` with `{ "content": "<frontmatter+wikitext>" }` - 200 with
/// the converted document as plain text. Malformed JSON, a non-string
/// `content`, and conversion failures all yield the same 400 payload.
///
/// The body is decoded as JSON whatever the `Content-Type` header says, so
/// the raw bytes are parsed here instead of going through the `Json`
/// extractor (which insists on `application/json`).
pub async fn convert_wikitext(State(state): State<WikitextAppState>, body: Bytes) -> Response {
    let request: ConvertRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(error = %error, "rejected request body");
            return (StatusCode::BAD_REQUEST, MALFORMED_PAYLOAD).into_response();
        }
    };

    match state.convert.handle(&request.content) {
        Ok(converted) => (StatusCode::OK, converted).into_response(),
        Err(error) => {
            tracing::debug!(error = %error, "document conversion failed");
            (StatusCode::BAD_REQUEST, MALFORMED_PAYLOAD).into_response()
        }
    }
}

/// Trailing-slash variant of the conversion route.
///
/// Redirects back to `/wikitext/` - a self-redirect, preserved from the
/// deployed behavior even though the intended target was probably
/// `/wikitext`. Clients that follow it will loop.
pub async fn wikitext_trailing_slash() -> Redirect {
    Redirect::to("/wikitext/")
}

/// Catch-all for unmatched routes.
///
/// Responds 404 with a body echoing the requested path.
pub async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("404! {}", uri.path()))
}
