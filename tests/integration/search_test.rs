//! Integration tests for search.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{BASE_URL, TestApp};

#[tokio::test]
async fn test_search_requires_id() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/search", Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("POST", "/search", Some(json!({ "has_photo": "on" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request_form("POST", "/search", "id=").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_unknown_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/search", Some(json!({ "id": "nope" })))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_without_note_returns_item() {
    let app = TestApp::new().await;
    let id = app.register("Drill", Some("cordless"), None).await;

    let response = app
        .request("POST", "/search", Some(json!({ "id": id })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Drill");
    assert_eq!(response.body["description"], "cordless");

    let response = app
        .request("POST", "/search", Some(json!({ "id": id, "has_photo": "off" })))
        .await;
    assert_eq!(response.body["description"], "cordless");

    let response = app
        .request("POST", "/search", Some(json!({ "id": id, "has_photo": true })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["description"], "cordless");
}

#[tokio::test]
async fn test_search_note_links_to_photo() {
    let app = TestApp::new().await;
    let id = app
        .register("Camera", Some("mirrorless"), Some(("p.jpg", b"photo-bytes")))
        .await;

    let response = app
        .request("POST", "/search", Some(json!({ "id": id, "has_photo": "on" })))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let description = response.body["description"].as_str().unwrap();
    let url = format!("{BASE_URL}/inventory/{id}/photo");
    assert_eq!(description, format!("mirrorless Photo: {url}"));

    let path = url.strip_prefix(BASE_URL).unwrap();
    let via_note = app.request("GET", path, None).await;
    let direct = app
        .request("GET", &format!("/inventory/{id}/photo"), None)
        .await;
    assert_eq!(via_note.status, StatusCode::OK);
    assert_eq!(via_note.bytes, direct.bytes);
    assert_eq!(via_note.bytes.as_ref(), b"photo-bytes");
}

#[tokio::test]
async fn test_search_note_without_photo() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app
        .request("POST", "/search", Some(json!({ "id": id, "has_photo": "on" })))
        .await;
    assert_eq!(response.body["description"], " Photo: None");
}

#[tokio::test]
async fn test_search_does_not_change_stored_item() {
    let app = TestApp::new().await;
    let id = app.register("Drill", Some("cordless"), None).await;

    app.request("POST", "/search", Some(json!({ "id": id, "has_photo": "on" })))
        .await;

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.body["description"], "cordless");
}

#[tokio::test]
async fn test_search_with_form_body() {
    let app = TestApp::new().await;
    let id = app.register("Drill", Some("cordless"), None).await;

    let response = app
        .request_form("POST", "/search", &format!("id={id}&has_photo=on"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["description"], "cordless Photo: None");
}

#[tokio::test]
async fn test_search_accepts_numeric_id() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;
    let numeric: i64 = id.parse().expect("memory ids are numeric timestamps");

    let response = app
        .request("POST", "/search", Some(json!({ "id": numeric })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
}
