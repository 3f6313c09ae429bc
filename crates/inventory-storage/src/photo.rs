//! Photo cache: stores uploaded photo binaries under opaque keys.
//!
//! A key is the filename inside the cache directory. Items hold the key as
//! their photo reference; the cache never hands out a key whose file is
//! only partially written.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use inventory_core::error::AppError;
use inventory_core::result::AppResult;
use inventory_core::traits::storage::{ByteStream, StorageProvider};

use crate::providers::LocalStorageProvider;
use crate::providers::local::mime_from_path;

/// Content type served when the key carries no recognized image extension.
pub const DEFAULT_PHOTO_CONTENT_TYPE: &str = "image/jpeg";

/// A photo opened for streaming.
pub struct StoredPhoto {
    /// Content type derived from the key.
    pub content_type: &'static str,
    /// Size of the file in bytes.
    pub size_bytes: u64,
    /// File content.
    pub stream: ByteStream,
}

impl std::fmt::Debug for StoredPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredPhoto")
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

/// Photo binaries kept in a flat cache directory.
#[derive(Debug, Clone)]
pub struct PhotoCache {
    provider: Arc<dyn StorageProvider>,
}

impl PhotoCache {
    /// Open the cache rooted at `cache_dir`, creating the directory if needed.
    pub async fn open(cache_dir: impl AsRef<Path>) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(cache_dir).await?;
        Ok(Self::from_provider(Arc::new(provider)))
    }

    /// Build a cache over an existing provider.
    pub fn from_provider(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// Whether the backing directory is usable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Allocate a fresh key, keeping the upload's extension when it is a
    /// known image type.
    pub fn allocate_key(original_name: Option<&str>) -> String {
        let stem = uuid::Uuid::new_v4().simple().to_string();
        match original_name.and_then(image_extension) {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        }
    }

    /// Write a photo under a new key and return the key.
    ///
    /// The key is only returned after the file is completely on disk.
    pub async fn store(&self, data: Bytes, original_name: Option<&str>) -> AppResult<String> {
        let key = Self::allocate_key(original_name);
        let size = data.len();
        self.provider.write(&key, data).await?;
        debug!(key = %key, bytes = size, "Stored photo");
        Ok(key)
    }

    /// Open a photo for reading.
    ///
    /// Returns `None` when the key is malformed or the file is gone.
    pub async fn open_photo(&self, key: &str) -> AppResult<Option<StoredPhoto>> {
        if !is_valid_key(key) || !self.provider.exists(key).await? {
            return Ok(None);
        }

        let meta = match self.provider.metadata(key).await {
            Ok(meta) => meta,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };
        let stream = match self.provider.read(key).await {
            Ok(stream) => stream,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        Ok(Some(StoredPhoto {
            content_type: content_type_for(key),
            size_bytes: meta.size_bytes,
            stream,
        }))
    }

    /// Delete a photo file. Missing files are not an error.
    pub async fn remove(&self, key: &str) -> AppResult<()> {
        if !is_valid_key(key) {
            return Err(AppError::validation(format!("Invalid photo key: {key}")));
        }
        self.provider.delete(key).await
    }

    /// Delete a photo file, logging instead of failing.
    pub async fn discard(&self, key: &str) {
        if let Err(e) = self.remove(key).await {
            warn!(key = %key, error = %e, "Failed to remove photo file");
        }
    }
}

/// Content type for a stored photo key.
pub fn content_type_for(key: &str) -> &'static str {
    mime_from_path(key).unwrap_or(DEFAULT_PHOTO_CONTENT_TYPE)
}

/// Lowercased image extension of an upload filename, if recognized.
fn image_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    mime_from_path(&format!("x.{ext}")).map(|_| ext)
}

/// Keys are plain filenames: no separators, no relative components.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.starts_with('.')
        && !key.contains(['/', '\\'])
}
