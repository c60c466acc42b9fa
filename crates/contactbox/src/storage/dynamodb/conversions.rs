//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting contact records to DynamoDB items.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use contactbox_core::contact::{format_timestamp, ContactRecord};

/// Convert a ContactRecord to a DynamoDB item.
///
/// Absent optional fields are written as `NULL` so that every item carries
/// the same attribute set.
pub fn contact_to_item(contact: &ContactRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(contact.id.to_string()));
    item.insert(
        "firstName".to_string(),
        AttributeValue::S(contact.first_name.clone()),
    );
    item.insert(
        "lastName".to_string(),
        AttributeValue::S(contact.last_name.clone()),
    );
    item.insert("email".to_string(), AttributeValue::S(contact.email.clone()));
    item.insert(
        "phoneNumber".to_string(),
        optional_string(contact.phone_number.as_deref()),
    );
    item.insert(
        "resumeUrl".to_string(),
        optional_string(contact.resume_url.as_deref()),
    );
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(format_timestamp(contact.created_at)),
    );

    item
}

fn optional_string(value: Option<&str>) -> AttributeValue {
    match value {
        Some(v) => AttributeValue::S(v.to_string()),
        None => AttributeValue::Null(true),
    }
}
