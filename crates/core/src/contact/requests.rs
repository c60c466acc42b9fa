//! API request and response types for the contact endpoints.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Every field that the server must validate is an `Option` so that a missing field
//! deserializes cleanly and is rejected by validation instead of by the JSON parser.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::operations::CONTACT_SAVED_MESSAGE;
use super::types::UploadGrant;

/// Request payload for `POST /api/get-upload-url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
}

impl UploadUrlRequest {
    /// Create a request for the given file name and MIME type.
    pub fn new(file_name: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            file_type: Some(file_type.into()),
        }
    }
}

/// Response payload for `POST /api/get-upload-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub file_url: String,
}

impl From<UploadGrant> for UploadUrlResponse {
    fn from(grant: UploadGrant) -> Self {
        Self {
            upload_url: grant.upload_url,
            file_url: grant.file_url,
        }
    }
}

/// Request payload for `POST /api/submit-contact`.
///
/// Optional fields serialize as `null` rather than being omitted, matching
/// what the web form sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl SubmitContactRequest {
    /// Create a request with the three required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            phone_number: None,
            resume_url: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Set the resume URL.
    pub fn with_resume_url(mut self, resume_url: impl Into<String>) -> Self {
        self.resume_url = Some(resume_url.into());
        self
    }
}

/// Response payload for `POST /api/submit-contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactResponse {
    pub message: String,
    pub contact_id: Uuid,
}

impl SubmitContactResponse {
    /// The success response for a newly stored contact.
    pub fn saved(contact_id: Uuid) -> Self {
        Self {
            message: CONTACT_SAVED_MESSAGE.to_string(),
            contact_id,
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_request_missing_fields_deserialize_as_none() {
        let request: UploadUrlRequest = serde_json::from_str(r#"{"fileName":"cv.pdf"}"#).unwrap();
        assert_eq!(request.file_name.as_deref(), Some("cv.pdf"));
        assert_eq!(request.file_type, None);
    }

    #[test]
    fn test_submit_contact_request_uses_camel_case() {
        let request: SubmitContactRequest = serde_json::from_str(
            r#"{"firstName":"Jane","lastName":"Doe","email":"jane@example.com","phoneNumber":null}"#,
        )
        .unwrap();

        assert_eq!(request.first_name.as_deref(), Some("Jane"));
        assert_eq!(request.last_name.as_deref(), Some("Doe"));
        assert_eq!(request.email.as_deref(), Some("jane@example.com"));
        assert_eq!(request.phone_number, None);
        assert_eq!(request.resume_url, None);
    }

    #[test]
    fn test_submit_contact_request_serializes_nulls() {
        let request = SubmitContactRequest::new("Jane", "Doe", "jane@example.com");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["firstName"], "Jane");
        assert!(json["phoneNumber"].is_null());
        assert!(json["resumeUrl"].is_null());
    }

    #[test]
    fn test_upload_url_response_from_grant() {
        let grant = UploadGrant {
            object_key: "resumes/abc-cv.pdf".to_string(),
            upload_url: "https://bucket.s3.amazonaws.com/resumes/abc-cv.pdf?sig".to_string(),
            file_url: "https://cdn.example.com/resumes/abc-cv.pdf".to_string(),
        };

        let json = serde_json::to_value(UploadUrlResponse::from(grant)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "uploadUrl": "https://bucket.s3.amazonaws.com/resumes/abc-cv.pdf?sig",
                "fileUrl": "https://cdn.example.com/resumes/abc-cv.pdf",
            })
        );
    }

    #[test]
    fn test_saved_response_shape() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        let json = serde_json::to_value(SubmitContactResponse::saved(id)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "message": "Contact information saved successfully",
                "contactId": "550e8400-e29b-41d4-a716-446655440001",
            })
        );
    }
}
