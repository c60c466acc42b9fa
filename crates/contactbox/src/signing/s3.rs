//! S3 upload signer.
//!
//! Presigns `PutObject` requests with `aws-sdk-s3`. Region and credentials
//! come from the AWS SDK default chain.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use contactbox_core::storage::{StorageError, StorageResult, UploadSigner};

pub struct S3Signer {
    client: Client,
    bucket: String,
}

impl S3Signer {
    /// Creates a new signer with the given S3 client and bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Creates a new signer using the AWS SDK default credential chain.
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket)
    }
}

#[async_trait]
impl UploadSigner for S3Signer {
    async fn presign_put(
        &self,
        object_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::InvalidConfig(e.to_string()))?;

        let presigned_request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .presigned(presigning_config)
            .await
            .map_err(|e| StorageError::PresignFailed(e.to_string()))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %object_key,
            expires_in_secs = expires_in.as_secs(),
            "S3 PUT presigned"
        );

        Ok(presigned_request.uri().to_string())
    }
}
