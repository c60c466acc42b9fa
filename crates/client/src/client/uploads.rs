//! Resume upload operations.

use contactbox_core::contact::{UploadUrlRequest, UploadUrlResponse};

use super::ContactboxClient;
use crate::error::{ClientError, Result};

impl ContactboxClient {
    /// Request a presigned upload URL for a file.
    pub async fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<UploadUrlResponse> {
        let response = self
            .client
            .post(self.url("/api/get-upload-url"))
            .json(&UploadUrlRequest::new(file_name, file_type))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// PUT file bytes directly to a presigned upload URL.
    ///
    /// The URL is absolute and points at object storage, not at the API.
    pub async fn upload_file(
        &self,
        upload_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let response = self
            .client
            .put(upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
