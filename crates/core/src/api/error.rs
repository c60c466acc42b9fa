use thiserror::Error;

use crate::contact::{ContactError, ErrorResponse};

pub const UPLOAD_URL_FAILED: &str = "Failed to generate upload URL";
pub const SAVE_CONTACT_FAILED: &str = "Failed to save contact information";

/// Errors returned to API callers.
///
/// `Server` only ever carries one of the fixed messages above. The underlying
/// collaborator error is logged where it happens and never reaches this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ContactError),
    #[error("{0}")]
    Server(&'static str),
    #[error("Not found")]
    NotFound,
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    /// The generic failure for the upload URL endpoint.
    pub fn upload_url_failed() -> Self {
        Self::Server(UPLOAD_URL_FAILED)
    }

    /// The generic failure for the contact submission endpoint.
    pub fn save_contact_failed() -> Self {
        Self::Server(SAVE_CONTACT_FAILED)
    }

    /// The JSON body sent for this error.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let error = ApiError::from(ContactError::MissingContactFields);
        assert_eq!(
            error.to_string(),
            "First name, last name, and email are required"
        );
    }

    #[test]
    fn test_server_error_messages() {
        assert_eq!(
            ApiError::upload_url_failed().to_string(),
            "Failed to generate upload URL"
        );
        assert_eq!(
            ApiError::save_contact_failed().to_string(),
            "Failed to save contact information"
        );
    }

    #[test]
    fn test_timeout_error_response() {
        assert_eq!(
            ApiError::Timeout.to_error_response(),
            ErrorResponse::new("Request timed out")
        );
    }

    #[test]
    fn test_not_found_error_response() {
        assert_eq!(
            ApiError::NotFound.to_error_response(),
            ErrorResponse::new("Not found")
        );
    }
}
