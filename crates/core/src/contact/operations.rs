use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::error::ContactError;
use super::requests::{SubmitContactRequest, UploadUrlRequest};
use super::types::ContactRecord;

/// Every uploaded resume lives under this key prefix.
pub const RESUME_KEY_PREFIX: &str = "resumes/";

/// Lifetime of a presigned upload URL.
pub const UPLOAD_URL_EXPIRY_SECS: u64 = 300;

pub const CONTACT_SAVED_MESSAGE: &str = "Contact information saved successfully";

/// Checks that both the file name and the file type are present and non-empty.
///
/// Returns the two values borrowed from the request.
pub fn validate_upload_request(request: &UploadUrlRequest) -> Result<(&str, &str), ContactError> {
    match (
        non_empty(request.file_name.as_deref()),
        non_empty(request.file_type.as_deref()),
    ) {
        (Some(file_name), Some(file_type)) => Ok((file_name, file_type)),
        _ => Err(ContactError::MissingUploadFields),
    }
}

/// Builds the object key for an uploaded resume.
///
/// Pattern: `resumes/<token>-<file_name>`
///
/// The file name is used as given, without sanitization.
pub fn resume_object_key(token: Uuid, file_name: &str) -> String {
    format!("{RESUME_KEY_PREFIX}{token}-{file_name}")
}

/// Builds the public retrieval URL for an object key.
///
/// Pattern: `https://<domain>/<object_key>`
pub fn public_file_url(domain: &str, object_key: &str) -> String {
    format!("https://{domain}/{object_key}")
}

/// Formats an instant as RFC 3339 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Validates a contact submission and turns it into a record.
///
/// First name, last name and email must be non-empty. Empty optional fields
/// are normalized to `None`.
pub fn build_contact_record(
    request: SubmitContactRequest,
    id: Uuid,
    created_at: DateTime<Utc>,
) -> Result<ContactRecord, ContactError> {
    let SubmitContactRequest {
        first_name,
        last_name,
        email,
        phone_number,
        resume_url,
    } = request;

    let (Some(first_name), Some(last_name), Some(email)) = (
        non_empty_owned(first_name),
        non_empty_owned(last_name),
        non_empty_owned(email),
    ) else {
        return Err(ContactError::MissingContactFields);
    };

    Ok(ContactRecord {
        id,
        first_name,
        last_name,
        email,
        phone_number: non_empty_owned(phone_number),
        resume_url: non_empty_owned(resume_url),
        created_at,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_owned(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
