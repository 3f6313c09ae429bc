//! Integration tests for item registration and CRUD.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{BASE_URL, MultipartBody, TestApp};

#[tokio::test]
async fn test_register_then_get_defaults() {
    let app = TestApp::new().await;

    let form = MultipartBody::new().text("inventory_name", "Drill");
    let response = app.request_multipart("POST", "/register", form).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.bytes.is_empty());

    let items = app.list().await;
    assert_eq!(items.len(), 1);
    let id = items[0]["id"].as_str().unwrap().to_string();

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["name"], "Drill");
    assert_eq!(response.body["description"], "");
    assert!(response.body["photo"].is_null());
    assert!(response.body["photoUrl"].is_null());
}

#[tokio::test]
async fn test_register_keeps_description() {
    let app = TestApp::new().await;
    let id = app.register("Saw", Some("Circular, 18V"), None).await;

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.body["description"], "Circular, 18V");
}

#[tokio::test]
async fn test_register_without_name_creates_nothing() {
    let app = TestApp::new().await;
    app.register("Existing", None, None).await;

    let form = MultipartBody::new().text("description", "nameless");
    let response = app.request_multipart("POST", "/register", form).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Bad Request");

    let form = MultipartBody::new().text("inventory_name", "");
    let response = app.request_multipart("POST", "/register", form).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.list().await.len(), 1);
}

#[tokio::test]
async fn test_register_whitespace_name_is_accepted() {
    let app = TestApp::new().await;

    let form = MultipartBody::new().text("inventory_name", "  ");
    let response = app.request_multipart("POST", "/register", form).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let items = app.list().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "  ");
}

#[tokio::test]
async fn test_register_without_name_writes_no_photo() {
    let app = TestApp::new().await;

    let form = MultipartBody::new().file("photo", "cat.jpg", "image/jpeg", b"jpeg-bytes");
    let response = app.request_multipart("POST", "/register", form).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.cache_files().is_empty());
}

#[tokio::test]
async fn test_register_requires_multipart() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/register", Some(json!({ "inventory_name": "Drill" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.list().await.is_empty());
}

#[tokio::test]
async fn test_register_with_photo_sets_photo_url() {
    let app = TestApp::new().await;
    let id = app
        .register("Camera", None, Some(("camera.jpg", b"\xff\xd8\xff\xe0fake")))
        .await;

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    let photo = response.body["photo"].as_str().unwrap();
    assert!(photo.ends_with(".jpg"));
    assert!(app.cache_path(photo).is_file());
    assert_eq!(
        response.body["photoUrl"],
        format!("{BASE_URL}/inventory/{id}/photo")
    );
}

#[tokio::test]
async fn test_ids_are_unique() {
    let app = TestApp::new().await;
    for i in 0..25 {
        app.register(&format!("Item {i}"), None, None).await;
    }

    let items = app.list().await;
    let mut ids: Vec<&str> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 25);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}

#[tokio::test]
async fn test_get_unknown_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/inventory/does-not-exist", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_update_preserves_id() {
    let app = TestApp::new().await;
    let id = app.register("Drill", Some("old"), None).await;

    let response = app
        .request(
            "PUT",
            &format!("/inventory/{id}"),
            Some(json!({ "id": "other-id", "name": "X" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["name"], "X");
    assert_eq!(response.body["description"], "old");

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.body["name"], "X");

    let response = app.request("GET", "/inventory/other-id", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_cannot_set_photo() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app
        .request(
            "PUT",
            &format!("/inventory/{id}"),
            Some(json!({ "photo": "../../etc/passwd" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["photo"].is_null());
}

#[tokio::test]
async fn test_update_with_form_body() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app
        .request_form("PUT", &format!("/inventory/{id}"), "description=Cordless+drill")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Drill");
    assert_eq!(response.body["description"], "Cordless drill");
}

#[tokio::test]
async fn test_update_rejects_empty_name() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app
        .request("PUT", &format!("/inventory/{id}"), Some(json!({ "name": "" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.body["name"], "Drill");
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/inventory/404", Some(json!({ "name": "X" })))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_malformed_json_is_bad_request() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let req = http::Request::builder()
        .method("PUT")
        .uri(format!("/inventory/{id}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app.request("DELETE", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("DELETE", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    assert!(app.list().await.is_empty());
}

#[tokio::test]
async fn test_delete_removes_photo_file() {
    let app = TestApp::new().await;
    let id = app.register("Lamp", None, Some(("lamp.png", b"png"))).await;
    assert_eq!(app.cache_files().len(), 1);

    let response = app.request("DELETE", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.cache_files().is_empty());
}

#[tokio::test]
async fn test_delete_keeps_photo_when_cleanup_disabled() {
    let app = TestApp::with_config(|c| c.storage.remove_stale_photos = false).await;
    let id = app.register("Lamp", None, Some(("lamp.png", b"png"))).await;

    let response = app.request("DELETE", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.cache_files().len(), 1);
}

#[tokio::test]
async fn test_public_url_override() {
    let app = TestApp::with_config(|c| {
        c.server.public_url = Some("https://inventory.example.com/".to_string());
    })
    .await;
    let id = app.register("Lamp", None, Some(("lamp.png", b"png"))).await;

    let items = app.list().await;
    assert_eq!(
        items[0]["photoUrl"],
        format!("https://inventory.example.com/inventory/{id}/photo")
    );
}
