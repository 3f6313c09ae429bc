//! Core type definitions used across the inventory workspace.

pub mod id;

pub use id::ItemId;
