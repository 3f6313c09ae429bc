//! Body extractor accepting JSON or urlencoded form data.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use serde::de::DeserializeOwned;

use inventory_core::error::AppError;

/// Deserializes the body as JSON or `application/x-www-form-urlencoded`,
/// chosen by `Content-Type`.
///
/// An empty body deserializes like an empty form, so optional fields come
/// out as `None`. Malformed bodies are validation errors.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Failed to read body: {e}")))?;

        decode(&content_type, &body).map(Self)
    }
}

fn decode<T: DeserializeOwned>(content_type: &str, body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_urlencoded::from_bytes(b"")
            .map_err(|e| AppError::validation(format!("Invalid empty body: {e}")));
    }

    let mime = content_type.split(';').next().unwrap_or("").trim();
    if mime == "application/json" || mime.ends_with("+json") {
        serde_json::from_slice(body)
            .map_err(|e| AppError::validation(format!("Invalid JSON body: {e}")))
    } else if mime == "application/x-www-form-urlencoded" {
        serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::validation(format!("Invalid form body: {e}")))
    } else {
        Err(AppError::validation(format!(
            "Unsupported content type: {}",
            if mime.is_empty() { "<none>" } else { mime }
        )))
    }
}
