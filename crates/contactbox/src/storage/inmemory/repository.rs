//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use contactbox_core::contact::ContactRecord;
use contactbox_core::storage::{ContactRepository, Result};

/// In-memory storage backend.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the server wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contacts: Arc<RwLock<HashMap<Uuid, ContactRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a stored contact by its ID.
    #[cfg(test)]
    pub async fn get_contact(&self, id: Uuid) -> Option<ContactRecord> {
        self.contacts.read().await.get(&id).cloned()
    }

    /// Number of stored contacts.
    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.contacts.read().await.len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryRepository {
    async fn put_contact(&self, contact: &ContactRecord) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.id, contact.clone());
        tracing::trace!(contact_id = %contact.id, "Stored contact in memory");
        Ok(())
    }
}
