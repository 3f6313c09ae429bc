//! Integration tests for the photo sub-resource.

mod helpers;

use http::StatusCode;

use helpers::{MultipartBody, TestApp};

#[tokio::test]
async fn test_upload_then_download_identical_bytes() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let response = app.upload_photo(&id, "drill.png", &data).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/inventory/{id}/photo"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), Some("image/png"));
    assert_eq!(response.bytes.as_ref(), data.as_slice());
}

#[tokio::test]
async fn test_unknown_extension_served_as_jpeg() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    app.upload_photo(&id, "drill", b"raw").await;

    let response = app
        .request("GET", &format!("/inventory/{id}/photo"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), Some("image/jpeg"));
}

#[tokio::test]
async fn test_no_photo_is_not_found() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app
        .request("GET", &format!("/inventory/{id}/photo"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_item_photo_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/inventory/123/photo", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_removed_out_of_band_is_not_found() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, Some(("d.jpg", b"jpeg"))).await;

    for name in app.cache_files() {
        std::fs::remove_file(app.cache_path(&name)).unwrap();
    }

    let response = app
        .request("GET", &format!("/inventory/{id}/photo"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // the item itself is still readable
    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_for_unknown_item_is_not_found() {
    let app = TestApp::new().await;

    let response = app.upload_photo("missing", "a.jpg", b"jpeg").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(app.cache_files().is_empty());

    // item lookup comes before the file check
    let form = MultipartBody::new().text("note", "no file");
    let response = app
        .request_multipart("PUT", "/inventory/missing/photo", form)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_without_file_is_bad_request() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let form = MultipartBody::new().text("note", "no file here");
    let response = app
        .request_multipart("PUT", &format!("/inventory/{id}/photo"), form)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // what a browser sends when no file was chosen
    let form = MultipartBody::new().file("photo", "", "application/octet-stream", b"");
    let response = app
        .request_multipart("PUT", &format!("/inventory/{id}/photo"), form)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert!(response.body["photo"].is_null());
}

#[tokio::test]
async fn test_replace_removes_previous_file() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, Some(("old.jpg", b"old"))).await;
    let old = app.cache_files();
    assert_eq!(old.len(), 1);

    let response = app.upload_photo(&id, "new.jpg", b"new").await;
    assert_eq!(response.status, StatusCode::OK);

    let files = app.cache_files();
    assert_eq!(files.len(), 1);
    assert_ne!(files, old);

    let response = app
        .request("GET", &format!("/inventory/{id}/photo"), None)
        .await;
    assert_eq!(response.bytes.as_ref(), b"new");
}

#[tokio::test]
async fn test_replace_keeps_previous_file_when_cleanup_disabled() {
    let app = TestApp::with_config(|c| c.storage.remove_stale_photos = false).await;
    let id = app.register("Drill", None, Some(("old.jpg", b"old"))).await;

    app.upload_photo(&id, "new.jpg", b"new").await;
    assert_eq!(app.cache_files().len(), 2);
}

#[tokio::test]
async fn test_upload_sets_reference_and_keeps_fields() {
    let app = TestApp::new().await;
    let id = app.register("Drill", Some("cordless"), None).await;

    app.upload_photo(&id, "drill.jpg", b"jpeg").await;

    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.body["name"], "Drill");
    assert_eq!(response.body["description"], "cordless");
    let photo = response.body["photo"].as_str().unwrap();
    assert_eq!(app.cache_files(), vec![photo.to_string()]);
}
