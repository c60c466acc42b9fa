use std::time::Duration;

use async_trait::async_trait;

use crate::contact::ContactRecord;

use super::{Result, StorageResult};

/// Document store for contact records.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Writes the record as a single put.
    ///
    /// A record with the same ID is overwritten.
    async fn put_contact(&self, contact: &ContactRecord) -> Result<()>;
}

/// Object storage that can hand out presigned upload URLs.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    /// Returns a URL that allows one `PUT` of `object_key` with the given
    /// content type until `expires_in` has elapsed.
    ///
    /// No object is created by this call.
    async fn presign_put(
        &self,
        object_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;
}
