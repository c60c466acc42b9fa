use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use contactbox_core::api::ApiError;
use contactbox_core::contact::{
    public_file_url, resume_object_key, validate_upload_request, UploadGrant, UploadUrlRequest,
    UPLOAD_URL_EXPIRY_SECS,
};
use contactbox_core::storage::UploadSigner;

/// Lifetime of every presigned upload URL.
const UPLOAD_URL_EXPIRY: Duration = Duration::from_secs(UPLOAD_URL_EXPIRY_SECS);

/// Issues upload grants for resume files.
pub struct StorageGateway {
    signer: Arc<dyn UploadSigner>,
    public_domain: String,
}

impl StorageGateway {
    pub fn new(signer: Arc<dyn UploadSigner>, public_domain: impl Into<String>) -> Self {
        Self {
            signer,
            public_domain: public_domain.into(),
        }
    }

    /// Mints a presigned upload URL for a new object under `resumes/`.
    ///
    /// Nothing is written to storage here; the object only exists once the
    /// client performs the upload.
    pub async fn issue_upload_grant(
        &self,
        request: &UploadUrlRequest,
    ) -> Result<UploadGrant, ApiError> {
        let (file_name, file_type) = validate_upload_request(request).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected upload URL request");
        })?;

        let object_key = resume_object_key(Uuid::new_v4(), file_name);

        let upload_url = self
            .signer
            .presign_put(&object_key, file_type, UPLOAD_URL_EXPIRY)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, object_key = %object_key, "Error generating pre-signed URL");
                ApiError::upload_url_failed()
            })?;

        let file_url = public_file_url(&self.public_domain, &object_key);

        tracing::info!(object_key = %object_key, file_type = %file_type, "Issued upload grant");

        Ok(UploadGrant {
            object_key,
            upload_url,
            file_url,
        })
    }
}
