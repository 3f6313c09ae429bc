//! Static HTML form pages.

use axum::response::Html;

const REGISTER_FORM: &str = include_str!("../../static/RegisterForm.html");
const SEARCH_FORM: &str = include_str!("../../static/SearchForm.html");

/// GET /RegisterForm.html
#[utoipa::path(
    get,
    path = "/RegisterForm.html",
    tag = "pages",
    responses((status = 200, description = "Registration form", content_type = "text/html", body = String))
)]
pub async fn register_form() -> Html<&'static str> {
    Html(REGISTER_FORM)
}

/// GET /SearchForm.html
#[utoipa::path(
    get,
    path = "/SearchForm.html",
    tag = "pages",
    responses((status = 200, description = "Search form", content_type = "text/html", body = String))
)]
pub async fn search_form() -> Html<&'static str> {
    Html(SEARCH_FORM)
}
