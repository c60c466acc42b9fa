use async_trait::async_trait;
use contactbox_core::contact::{SubmitContactRequest, SubmitContactResponse, UploadUrlResponse};

use crate::client::ContactboxClient;
use crate::error::Result;

/// The three network calls the form pipeline makes.
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Ask the API for a presigned upload URL.
    async fn request_upload_url(&self, file_name: &str, file_type: &str)
        -> Result<UploadUrlResponse>;

    /// PUT the file bytes to the presigned URL.
    async fn upload_file(&self, upload_url: &str, content_type: &str, bytes: Vec<u8>)
        -> Result<()>;

    /// Submit the contact payload.
    async fn submit_contact(&self, request: &SubmitContactRequest)
        -> Result<SubmitContactResponse>;
}

#[async_trait]
impl ContactApi for ContactboxClient {
    async fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<UploadUrlResponse> {
        ContactboxClient::request_upload_url(self, file_name, file_type).await
    }

    async fn upload_file(&self, upload_url: &str, content_type: &str, bytes: Vec<u8>) -> Result<()> {
        ContactboxClient::upload_file(self, upload_url, content_type, bytes).await
    }

    async fn submit_contact(&self, request: &SubmitContactRequest) -> Result<SubmitContactResponse> {
        ContactboxClient::submit_contact(self, request).await
    }
}
