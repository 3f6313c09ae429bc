//! Core traits defined in `inventory-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
