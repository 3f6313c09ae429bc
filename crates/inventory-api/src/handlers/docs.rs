//! OpenAPI document and Swagger UI page.

use axum::Json;
use axum::response::Html;
use utoipa::OpenApi;

use crate::dto::{
    HealthResponse, ItemResponse, PhotoForm, RegisterForm, SearchId, SearchRequest,
    UpdateItemRequest,
};
use crate::handlers::{health, inventory, pages, photo, register, search};

/// OpenAPI description of the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory API", version = "1.0"),
    paths(
        register::register,
        inventory::list_items,
        inventory::get_item,
        inventory::update_item,
        inventory::delete_item,
        photo::get_photo,
        photo::put_photo,
        search::search,
        pages::register_form,
        pages::search_form,
        health::health,
    ),
    components(schemas(
        ItemResponse,
        UpdateItemRequest,
        SearchRequest,
        SearchId,
        RegisterForm,
        PhotoForm,
        HealthResponse,
    )),
    tags(
        (name = "inventory", description = "Inventory items"),
        (name = "photo", description = "Item photos"),
        (name = "pages", description = "HTML forms"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

const SWAGGER_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Inventory API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// GET /docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}
