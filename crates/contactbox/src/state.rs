//! Application state with process-scoped collaborators.
//!
//! The storage and signing clients are created once at startup and shared by
//! every request through `Arc`s. Backends are chosen via feature flags.

use std::sync::Arc;

use contactbox_core::storage::{ContactRepository, UploadSigner};

use crate::config::Config;
use crate::services::{ContactService, StorageGateway};

/// Shared application state.
///
/// Cloned for each request handler. Holds no mutable state of its own.
#[derive(Clone)]
pub struct AppState {
    /// Issues presigned resume upload URLs.
    pub uploads: Arc<StorageGateway>,
    /// Validates and persists contact submissions.
    pub contacts: Arc<ContactService>,
}

impl AppState {
    /// Creates AppState from already constructed collaborators.
    pub fn with_backends(
        contact_repo: Arc<dyn ContactRepository>,
        signer: Arc<dyn UploadSigner>,
        config: &Config,
    ) -> Self {
        Self {
            uploads: Arc::new(StorageGateway::new(signer, config.public_domain.clone())),
            contacts: Arc::new(ContactService::new(contact_repo)),
        }
    }

    /// Creates AppState with the backends selected by feature flags.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let contact_repo = contact_repository(config).await;
        let signer = upload_signer(config).await;

        Ok(Self::with_backends(contact_repo, signer, config))
    }
}

// ============================================================================
// Factory functions for the configured backends
// ============================================================================

#[cfg(feature = "inmemory")]
async fn contact_repository(_config: &Config) -> Arc<dyn ContactRepository> {
    tracing::warn!("Using in-memory contact storage; records are lost on restart");
    Arc::new(crate::storage::InMemoryRepository::new())
}

#[cfg(feature = "dynamodb")]
async fn contact_repository(config: &Config) -> Arc<dyn ContactRepository> {
    tracing::info!(table = %config.contacts_table, "Using DynamoDB contact storage");
    Arc::new(crate::storage::DynamoDbRepository::from_env(config.contacts_table.clone()).await)
}

#[cfg(feature = "local")]
async fn upload_signer(config: &Config) -> Arc<dyn UploadSigner> {
    tracing::info!(
        endpoint = %config.local_storage_endpoint,
        bucket = %config.resume_bucket,
        "Using local upload signer"
    );
    Arc::new(crate::signing::LocalSigner::new(
        config.local_storage_endpoint.clone(),
        config.resume_bucket.clone(),
    ))
}

#[cfg(feature = "s3")]
async fn upload_signer(config: &Config) -> Arc<dyn UploadSigner> {
    tracing::info!(bucket = %config.resume_bucket, "Using S3 upload signer");
    Arc::new(crate::signing::S3Signer::from_env(config.resume_bucket.clone()).await)
}
