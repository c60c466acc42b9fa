//! Pure functions for mapping API errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`ApiError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::ApiError;

/// Maps an [`ApiError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `Server` -> 500 (Internal Server Error)
/// - `NotFound` -> 404 (Not Found)
/// - `Timeout` -> 408 (Request Timeout)
///
/// # Examples
///
/// ```
/// use contactbox_core::api::{api_error_to_status_code, ApiError};
///
/// assert_eq!(api_error_to_status_code(&ApiError::NotFound), 404);
/// ```
pub fn api_error_to_status_code(error: &ApiError) -> u16 {
    match error {
        ApiError::Validation(_) => 400,
        ApiError::Server(_) => 500,
        ApiError::NotFound => 404,
        ApiError::Timeout => 408,
    }
}
