//! # inventory-database
//!
//! The [`ItemStore`] contract and its two interchangeable variants: a
//! durable PostgreSQL repository and a volatile in-process store. The
//! [`StoreManager`] picks one at startup from configuration.

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use manager::StoreManager;
pub use memory::MemoryItemStore;
pub use repositories::ItemRepository;
pub use store::{ItemStore, PhotoReplaced};
