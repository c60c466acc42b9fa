use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact submission as it is persisted in the document store.
///
/// Records are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Only checked for presence, never for format.
    pub email: String,
    pub phone_number: Option<String>,
    /// Public URL of an uploaded resume. Trusted as supplied by the client.
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Creates a record with only the required fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: None,
            resume_url: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the resume URL.
    pub fn with_resume_url(mut self, resume_url: impl Into<String>) -> Self {
        self.resume_url = Some(resume_url.into());
        self
    }

    /// Sets a specific ID for this record (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific creation instant (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A short-lived permission to upload one object.
///
/// Grants are never stored. The storage service stops honoring `upload_url`
/// once it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadGrant {
    /// Key of the object the client is allowed to write, under `resumes/`.
    pub object_key: String,
    /// Presigned PUT URL scoped to `object_key` and the declared content type.
    pub upload_url: String,
    /// Stable public URL the object will be served from after upload.
    pub file_url: String,
}
