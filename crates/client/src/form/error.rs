use thiserror::Error;

use crate::error::ClientError;

/// Failure of one step of the submission pipeline.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Failed to get upload URL")]
    UploadUrl(#[source] ClientError),

    #[error("Failed to upload resume")]
    Upload(#[source] ClientError),

    #[error("Failed to submit contact information")]
    Submit(#[source] ClientError),

    #[error("An error occurred. Please try again.")]
    Unexpected(#[source] std::io::Error),

    #[error("A submission is already in progress")]
    InFlight,
}
