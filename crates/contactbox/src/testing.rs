//! Collaborator doubles shared by the router and service tests.
//!
//! None of these depend on a storage or signing feature, so the tests that
//! use them build under every backend combination.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use contactbox_core::contact::ContactRecord;
use contactbox_core::storage::{ContactRepository, Result, StorageResult, UploadSigner};

/// Keeps every stored contact in a map.
#[derive(Default)]
pub struct RecordingRepository {
    contacts: Mutex<HashMap<Uuid, ContactRecord>>,
}

impl RecordingRepository {
    pub async fn get(&self, id: Uuid) -> Option<ContactRecord> {
        self.contacts.lock().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.contacts.lock().await.len()
    }
}

#[async_trait]
impl ContactRepository for RecordingRepository {
    async fn put_contact(&self, contact: &ContactRecord) -> Result<()> {
        self.contacts
            .lock()
            .await
            .insert(contact.id, contact.clone());
        Ok(())
    }
}

/// A presign call seen by [`RecordingSigner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedUpload {
    pub object_key: String,
    pub content_type: String,
    pub expires_in: Duration,
}

/// Signs URLs under `https://storage.test/<bucket>/` and records each call.
pub struct RecordingSigner {
    bucket: String,
    issued: Mutex<Vec<IssuedUpload>>,
}

impl RecordingSigner {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            issued: Mutex::new(Vec::new()),
        }
    }

    pub async fn issued(&self) -> Vec<IssuedUpload> {
        self.issued.lock().await.clone()
    }
}

#[async_trait]
impl UploadSigner for RecordingSigner {
    async fn presign_put(
        &self,
        object_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.issued.lock().await.push(IssuedUpload {
            object_key: object_key.to_string(),
            content_type: content_type.to_string(),
            expires_in,
        });

        Ok(format!(
            "https://storage.test/{}/{}?X-Amz-Expires={}",
            self.bucket,
            object_key,
            expires_in.as_secs()
        ))
    }
}

/// Never answers within any sane deadline.
pub struct StalledSigner;

#[async_trait]
impl UploadSigner for StalledSigner {
    async fn presign_put(&self, _: &str, _: &str, _: Duration) -> StorageResult<String> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(String::new())
    }
}
