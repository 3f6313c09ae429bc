//! # inventory-storage
//!
//! Photo binaries live as files in a cache directory, linked from items by
//! an opaque filename. [`providers::LocalStorageProvider`] does the file
//! I/O; [`photo::PhotoCache`] owns the reference contract on top of it.

pub mod photo;
pub mod providers;

pub use photo::{PhotoCache, StoredPhoto};
pub use providers::LocalStorageProvider;
