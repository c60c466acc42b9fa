use contactbox_core::api::ApiError;

use crate::handlers::AppError;

/// Fallback for every (method, path) pair outside the route table.
pub async fn not_found() -> AppError {
    AppError(ApiError::NotFound)
}
