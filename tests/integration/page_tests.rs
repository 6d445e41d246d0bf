//! Integration tests for the /mushaf/{mushaf_type}/page/{page} image endpoint.
//!
//! Tests verify:
//! - Raw bytes and literal `image/<ext>` content types
//! - Lookup priority across naming forms and extensions
//! - Not-found and storage failure bodies

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::test_utils::{
    body_bytes, expect_json, failing_router, get, quran_tree, MushafTree,
};

fn content_type(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
}

// =============================================================================
// Successful Retrieval
// =============================================================================

#[tokio::test]
async fn test_get_page_png() {
    let tree = quran_tree();

    let response = get(tree.router(), "/mushaf/quran/page/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "image/png");

    let body = body_bytes(response).await;
    assert_eq!(body, b"\x89PNG page one");
}

#[tokio::test]
async fn test_get_page_jpg_keeps_literal_extension() {
    let tree = quran_tree();

    let response = get(tree.router(), "/mushaf/quran/page/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "image/jpg");
    assert_eq!(body_bytes(response).await, b"\xFF\xD8 page two");
}

#[tokio::test]
async fn test_get_page_bare_number_form() {
    let tree = MushafTree::new().with_file("warsh", "12.webp", b"webp bytes");

    let response = get(tree.router(), "/mushaf/warsh/page/12").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "image/webp");
    assert_eq!(body_bytes(response).await, b"webp bytes");
}

#[tokio::test]
async fn test_get_page_leading_zeros() {
    let tree = quran_tree();

    let response = get(tree.router(), "/mushaf/quran/page/001").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"\x89PNG page one");
}

#[tokio::test]
async fn test_head_request() {
    let tree = quran_tree();
    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/mushaf/quran/page/1")
        .body(Body::empty())
        .unwrap();

    let response = tree.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "image/png");
}

// =============================================================================
// Lookup Priority
// =============================================================================

#[tokio::test]
async fn test_prefixed_png_beats_bare_jpg() {
    let tree = MushafTree::new()
        .with_file("quran", "page5.png", b"prefixed png")
        .with_file("quran", "5.jpg", b"bare jpg");

    let response = get(tree.router(), "/mushaf/quran/page/5").await;
    assert_eq!(content_type(&response), "image/png");
    assert_eq!(body_bytes(response).await, b"prefixed png");
}

#[tokio::test]
async fn test_prefixed_beats_bare_for_same_extension() {
    let tree = MushafTree::new()
        .with_file("quran", "5.png", b"bare png")
        .with_file("quran", "page5.png", b"prefixed png");

    let response = get(tree.router(), "/mushaf/quran/page/5").await;
    assert_eq!(body_bytes(response).await, b"prefixed png");
}

#[tokio::test]
async fn test_extension_order_beats_prefix() {
    let tree = MushafTree::new()
        .with_file("quran", "5.jpg", b"bare jpg")
        .with_file("quran", "page5.jpeg", b"prefixed jpeg")
        .with_file("quran", "page5.webp", b"prefixed webp");

    let response = get(tree.router(), "/mushaf/quran/page/5").await;
    assert_eq!(content_type(&response), "image/jpg");
    assert_eq!(body_bytes(response).await, b"bare jpg");
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_page_not_found() {
    let tree = quran_tree();

    let body = expect_json(
        get(tree.router(), "/mushaf/quran/page/99").await,
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_eq!(body, json!({ "error": "Page 99 not found in quran" }));
}

#[tokio::test]
async fn test_page_unknown_edition() {
    let tree = quran_tree();

    let body = expect_json(
        get(tree.router(), "/mushaf/hafs/page/1").await,
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_eq!(body, json!({ "error": "Mushaf type 'hafs' not found" }));
}

#[tokio::test]
async fn test_page_number_not_numeric() {
    let tree = quran_tree();

    for uri in [
        "/mushaf/quran/page/one",
        "/mushaf/quran/page/-1",
        "/mushaf/quran/page/1.png",
    ] {
        let response = get(tree.router(), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_page_not_listed_form_still_not_found_when_absent() {
    // notapage.png exists but never matches a page number
    let tree = quran_tree();

    let response = get(tree.router(), "/mushaf/quran/page/0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_storage_failure() {
    let body = expect_json(
        get(failing_router("Permission denied"), "/mushaf/quran/page/1").await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;

    assert_eq!(body["error"], "Permission denied: '/srv/mushaf'");
}

#[tokio::test]
async fn test_failure_does_not_affect_later_requests() {
    let tree = quran_tree();

    let missing = get(tree.router(), "/mushaf/quran/page/99").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let found = get(tree.router(), "/mushaf/quran/page/1").await;
    assert_eq!(found.status(), StatusCode::OK);
}
