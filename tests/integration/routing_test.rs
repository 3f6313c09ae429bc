//! Integration tests for method handling, static pages, docs and health.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode, header};

use helpers::TestApp;

#[tokio::test]
async fn test_undefined_method_on_known_path() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    for (method, path) in [
        ("PATCH", format!("/inventory/{id}")),
        ("POST", "/inventory".to_string()),
        ("DELETE", "/inventory".to_string()),
        ("GET", "/register".to_string()),
        ("GET", "/search".to_string()),
        ("POST", format!("/inventory/{id}/photo")),
        ("DELETE", format!("/inventory/{id}/photo")),
    ] {
        let response = app.request(method, &path, None).await;
        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {path}"
        );
    }

    // the item is untouched
    let response = app.request("GET", &format!("/inventory/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_method_not_allowed() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/no/such/path", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Method Not Allowed");

    let response = app.request("POST", "/", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_plain_options_is_method_not_allowed() {
    let app = TestApp::new().await;

    for path in ["/register", "/inventory", "/no/such/path"] {
        let response = app.request("OPTIONS", path, None).await;
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "OPTIONS {path}");
        assert_eq!(response.text(), "Method Not Allowed");
    }
}

#[tokio::test]
async fn test_cors_preflight_still_answered() {
    let app = TestApp::new().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/inventory")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .headers
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let app = TestApp::new().await;
    let id = app.register("Drill", None, None).await;

    let response = app.request("GET", "/inventory/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app.request("GET", &format!("/inventory/{id}/"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Drill");
}

#[tokio::test]
async fn test_static_forms() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/RegisterForm.html", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().unwrap().starts_with("text/html"));
    assert!(response.text().contains("name=\"inventory_name\""));

    let response = app.request("GET", "/SearchForm.html", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("name=\"has_photo\""));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/docs/openapi.json", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(response.body["paths"]["/inventory/{id}/photo"]["put"].is_object());

    let response = app.request("GET", "/docs", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("/docs/openapi.json"));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
    assert_eq!(response.body["cache_reachable"], true);
}
