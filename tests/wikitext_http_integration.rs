//! Integration tests for the wikitext HTTP endpoint.
//!
//! These drive the full router through `tower::ServiceExt::oneshot`,
//! covering the documented surface: conversion, the fixed 400 payload,
//! the trailing-slash redirect, and the echoing 404.

use std::sync::Arc;

use axum::body::Body;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wikitext_md::adapters::http::{wikitext_router, WikitextAppState};
use wikitext_md::adapters::wikitext::ParseWikiTextConverter;
use wikitext_md::application::ConvertDocumentHandler;

fn app() -> axum::Router {
    let converter = Arc::new(ParseWikiTextConverter::new());
    let convert = Arc::new(ConvertDocumentHandler::new(converter));
    wikitext_router(WikitextAppState { convert })
}

fn post_json(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/wikitext")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_returns_empty_200() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");
}

#[tokio::test]
async fn test_convert_document() {
    let payload = serde_json::json!({
        "content": "---\nrevision:\n  - comment: '[[Link]] bold'\n---\n==Heading==\n[[Link]] text"
    });
    let response = app().oneshot(post_json(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.starts_with("---\n"), "missing frontmatter framing: {body}");
    assert!(body.contains("# Heading"), "heading not converted: {body}");
    assert!(!body.contains("[["), "inline link markup survived: {body}");
    assert!(!body.contains("]]"), "inline link markup survived: {body}");
}

#[tokio::test]
async fn test_convert_preserves_metadata() {
    let payload = serde_json::json!({
        "content": "---\ntitle: Some Page\nns: 0\nrevision:\n  - id: 7\n    comment: edit\n---\nbody"
    });
    let response = app().oneshot(post_json(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("title: Some Page"));
    assert!(body.contains("ns: 0"));
    assert!(body.contains("id: 7"));
}

#[tokio::test]
async fn test_convert_without_content_type_header() {
    // The body is decoded as JSON no matter what the Content-Type header
    // says (or whether it is present at all).
    let payload = serde_json::json!({
        "content": "---\nrevision:\n  - comment: '[[Link]] bold'\n---\n==Heading==\n[[Link]] text"
    });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/wikitext")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("# Heading"));
}

#[tokio::test]
async fn test_invalid_json_returns_fixed_400() {
    let response = app().oneshot(post_json("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Malformed json payload");
}

#[tokio::test]
async fn test_non_string_content_returns_400() {
    let response = app().oneshot(post_json(r#"{"content":123}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Malformed json payload");
}

#[tokio::test]
async fn test_conversion_failure_returns_400() {
    // Valid JSON, but the document has no frontmatter
    let payload = serde_json::json!({ "content": "no frontmatter" });
    let response = app().oneshot(post_json(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Malformed json payload");
}

#[tokio::test]
async fn test_get_wikitext_without_body_returns_400() {
    // Routes match on path alone; a GET without a JSON body takes the
    // malformed-payload path.
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/wikitext")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Malformed json payload");
}

#[tokio::test]
async fn test_trailing_slash_self_redirect() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/wikitext/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    // The redirect target keeps the trailing slash (self-redirect).
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/wikitext/"
    );
}

#[tokio::test]
async fn test_unknown_path_echoes_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "404! /unknown");
}
