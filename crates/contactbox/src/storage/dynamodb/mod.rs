//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`ContactRepository`]
//! using `aws-sdk-dynamodb`. The table is keyed by the `id` attribute.
//!
//! [`ContactRepository`]: contactbox_core::storage::ContactRepository

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
