//! # inventory-entity
//!
//! Domain entity models for the inventory service. [`item::Item`] is the
//! only persisted record; the change sets next to it describe what a
//! creation or an update may touch.

pub mod item;

pub use item::{CreateItem, Item, UpdateItem};
