//! Multipart form extractor for photo uploads.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};
use bytes::Bytes;

use inventory_core::error::AppError;

/// Multipart field carrying the photo file.
pub const PHOTO_FIELD: &str = "photo";

/// An uploaded photo file.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Filename supplied by the client, used only for its extension.
    pub file_name: Option<String>,
    /// File content.
    pub data: Bytes,
}

impl PhotoUpload {
    /// A browser submits an empty, unnamed part when no file was chosen.
    fn is_placeholder(&self) -> bool {
        self.data.is_empty() && self.file_name.as_deref().is_none_or(str::is_empty)
    }
}

/// A parsed `multipart/form-data` body: text fields plus the optional photo.
///
/// The whole body is read before the handler runs, so validation happens
/// before anything is written to the cache directory.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// Text fields by name; the last value wins on repeats.
    pub fields: HashMap<String, String>,
    /// The photo file, if one was attached.
    pub photo: Option<PhotoUpload>,
}

impl UploadForm {
    /// A text field, treating empty values as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Take the photo out of the form.
    pub fn take_photo(&mut self) -> Option<PhotoUpload> {
        self.photo.take()
    }
}

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?;

        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(String::from);

            if name == PHOTO_FIELD && file_name.is_some() {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                let upload = PhotoUpload { file_name, data };
                if !upload.is_placeholder() {
                    form.photo = Some(upload);
                }
            } else if file_name.is_none() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                form.fields.insert(name, text);
            }
            // other file parts are dropped unread
        }

        Ok(form)
    }
}
