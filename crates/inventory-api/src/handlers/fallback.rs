//! Catch-all for requests no route answers.

use inventory_core::error::AppError;

/// Any method on an unknown path.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("No route for this method and path")
}
