//! HTTP request handlers.

pub mod docs;
pub mod fallback;
pub mod health;
pub mod inventory;
pub mod pages;
pub mod photo;
pub mod register;
pub mod search;
