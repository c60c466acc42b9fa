//! DynamoDB repository implementation.
//!
//! Implements [`ContactRepository`] from `contactbox_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use contactbox_core::contact::ContactRecord;
use contactbox_core::storage::{ContactRepository, Result};

use super::conversions::contact_to_item;
use super::error::map_put_item_error;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }
}

#[async_trait]
impl ContactRepository for DynamoDbRepository {
    async fn put_contact(&self, contact: &ContactRecord) -> Result<()> {
        let item = contact_to_item(contact);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(
            table = %self.table_name,
            contact_id = %contact.id,
            "DynamoDB put successful"
        );

        Ok(())
    }
}
