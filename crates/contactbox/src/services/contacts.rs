use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use contactbox_core::api::ApiError;
use contactbox_core::contact::{build_contact_record, SubmitContactRequest};
use contactbox_core::storage::ContactRepository;

/// Validates and stores contact submissions.
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Stores a new contact record and returns its generated ID.
    ///
    /// Identical submissions are stored twice under different IDs.
    pub async fn save_contact(&self, request: SubmitContactRequest) -> Result<Uuid, ApiError> {
        let contact = build_contact_record(request, Uuid::new_v4(), Utc::now()).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected contact submission");
        })?;

        self.repo.put_contact(&contact).await.map_err(|e| {
            tracing::error!(error = %e, contact_id = %contact.id, "Error saving contact");
            ApiError::save_contact_failed()
        })?;

        tracing::info!(
            contact_id = %contact.id,
            has_resume = contact.resume_url.is_some(),
            "Saved contact"
        );

        Ok(contact.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contactbox_core::contact::{ContactError, ContactRecord};
    use contactbox_core::storage::{RepositoryError, Result};

    use crate::testing::RecordingRepository;

    struct BrokenRepository;

    #[async_trait]
    impl ContactRepository for BrokenRepository {
        async fn put_contact(&self, _: &ContactRecord) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_save_contact_writes_one_record() {
        let repo = Arc::new(RecordingRepository::default());
        let service = ContactService::new(repo.clone());
        let before = Utc::now();

        let id = service
            .save_contact(SubmitContactRequest::new("Jane", "Doe", "jane@example.com"))
            .await
            .unwrap();

        assert_eq!(repo.count().await, 1);
        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored.first_name, "Jane");
        assert!(stored.created_at >= before);
    }

    #[tokio::test]
    async fn test_save_contact_rejects_before_touching_storage() {
        let repo = Arc::new(RecordingRepository::default());
        let service = ContactService::new(repo.clone());

        let result = service
            .save_contact(SubmitContactRequest {
                first_name: Some("Jane".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(
            result,
            Err(ApiError::Validation(ContactError::MissingContactFields))
        );
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_save_contact_hides_repository_error() {
        let service = ContactService::new(Arc::new(BrokenRepository));

        let result = service
            .save_contact(SubmitContactRequest::new("Jane", "Doe", "jane@example.com"))
            .await;

        assert_eq!(result, Err(ApiError::save_contact_failed()));
    }
}
