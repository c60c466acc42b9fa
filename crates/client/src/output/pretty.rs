//! Pretty output formatting.

use contactbox_core::contact::{SubmitContactResponse, UploadUrlResponse};
use uuid::Uuid;

/// Format an upload grant for display.
pub fn format_upload_url(grant: &UploadUrlResponse) -> String {
    format!(
        "Upload URL:\n  {}\nFile URL:\n  {}",
        grant.upload_url, grant.file_url
    )
}

/// Format a submit-contact response for display.
pub fn format_contact_response(response: &SubmitContactResponse) -> String {
    format!("{}\n  ID: {}", response.message, response.contact_id)
}

/// Format the id of a contact stored through the form.
pub fn format_contact_id(contact_id: Uuid) -> String {
    format!("  ID: {contact_id}")
}
