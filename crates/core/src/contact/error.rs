use thiserror::Error;

/// Validation failures for contact and upload requests.
///
/// The display strings are part of the HTTP contract and are returned to
/// callers verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("fileName and fileType are required")]
    MissingUploadFields,
    #[error("First name, last name, and email are required")]
    MissingContactFields,
}
