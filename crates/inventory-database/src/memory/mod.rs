//! Volatile in-process item store.

pub mod store;

pub use store::MemoryItemStore;
