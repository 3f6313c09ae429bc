//! Request and response data transfer objects.

pub mod request;
pub mod response;

pub use request::{PhotoForm, RegisterForm, SearchId, SearchRequest, UpdateItemRequest};
pub use response::{HealthResponse, ItemResponse};
