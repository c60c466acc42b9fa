//! Local upload signer.
//!
//! Produces unsigned URLs of the form
//! `<endpoint>/<bucket>/<object_key>?X-Amz-Expires=<seconds>`. Useful against
//! a local S3-compatible server that does not check signatures.

use std::time::Duration;

use async_trait::async_trait;

use contactbox_core::storage::{StorageResult, UploadSigner};

#[derive(Debug, Clone)]
pub struct LocalSigner {
    endpoint: String,
    bucket: String,
}

impl LocalSigner {
    pub fn new(endpoint: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl UploadSigner for LocalSigner {
    async fn presign_put(
        &self,
        object_key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "{}/{}/{}?X-Amz-Expires={}",
            self.endpoint,
            self.bucket,
            object_key,
            expires_in.as_secs()
        ))
    }
}
