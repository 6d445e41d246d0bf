//! Integration tests for the /mushaf/{mushaf_type} page listing endpoint.

use axum::http::StatusCode;
use serde_json::json;

use super::test_utils::{body_bytes, expect_json, failing_router, get, quran_tree, MushafTree};

#[tokio::test]
async fn test_list_pages_example_tree() {
    let tree = quran_tree();

    let response = get(tree.router(), "/mushaf/quran").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"mushaf_type":"quran","total_pages":2,"pages":[{"page":1,"filename":"page1.png"},{"page":2,"filename":"page2.jpg"}]}"#
    );
}

#[tokio::test]
async fn test_list_pages_sorted_numerically() {
    let tree = MushafTree::new()
        .with_file("madani", "page10.png", b"10")
        .with_file("madani", "page9.webp", b"9")
        .with_file("madani", "page100.jpeg", b"100")
        .with_file("madani", "page1.jpg", b"1");

    let body = expect_json(get(tree.router(), "/mushaf/madani").await, StatusCode::OK).await;

    let numbers: Vec<i64> = body["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["page"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 9, 10, 100]);
    assert_eq!(body["total_pages"], 4);
}

#[tokio::test]
async fn test_list_pages_excludes_non_matching_files() {
    let tree = MushafTree::new()
        .with_file("madani", "page1.png", b"1")
        .with_file("madani", "2.png", b"bare number")
        .with_file("madani", "cover.jpg", b"cover")
        .with_file("madani", "page3.gif", b"gif")
        .with_file("madani", "page4.PNG", b"upper")
        .with_file("madani", "pagefour.png", b"word")
        .with_file("madani", "notes.txt", b"txt");

    let body = expect_json(get(tree.router(), "/mushaf/madani").await, StatusCode::OK).await;

    assert_eq!(
        body["pages"],
        json!([{ "page": 1, "filename": "page1.png" }])
    );
    assert_eq!(body["total_pages"], 1);
}

#[tokio::test]
async fn test_list_pages_empty_edition() {
    let tree = MushafTree::new().with_edition("warsh");

    let body = expect_json(get(tree.router(), "/mushaf/warsh").await, StatusCode::OK).await;

    assert_eq!(
        body,
        json!({ "mushaf_type": "warsh", "total_pages": 0, "pages": [] })
    );
}

#[tokio::test]
async fn test_list_pages_idempotent() {
    let tree = quran_tree();

    let first = expect_json(get(tree.router(), "/mushaf/quran").await, StatusCode::OK).await;
    let second = expect_json(get(tree.router(), "/mushaf/quran").await, StatusCode::OK).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_pages_unknown_edition() {
    let tree = quran_tree();

    let body = expect_json(
        get(tree.router(), "/mushaf/hafs").await,
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_eq!(body, json!({ "error": "Mushaf type 'hafs' not found" }));
}

#[tokio::test]
async fn test_list_pages_rejects_path_escape() {
    let tree = quran_tree();

    let response = get(tree.router(), "/mushaf/..").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(tree.router(), "/mushaf/quran%2F..").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pages_storage_failure() {
    let body = expect_json(
        get(failing_router("Input/output error"), "/mushaf/quran").await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;

    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Input/output error"));
}
