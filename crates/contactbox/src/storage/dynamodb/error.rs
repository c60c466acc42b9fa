//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `contactbox_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use contactbox_core::storage::RepositoryError;

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(failure) => {
            RepositoryError::ConnectionFailed(format!("{failure:?}"))
        }
        SdkError::TimeoutError(_) => {
            RepositoryError::ConnectionFailed("Request timed out".to_string())
        }
        err => match err.into_service_error() {
            PutItemError::ResourceNotFoundException(_) => {
                RepositoryError::QueryFailed("Table not found".to_string())
            }
            PutItemError::ProvisionedThroughputExceededException(_) => {
                RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
            }
            PutItemError::RequestLimitExceeded(_) => {
                RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
            }
            PutItemError::ItemCollectionSizeLimitExceededException(_) => {
                RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
            }
            PutItemError::TransactionConflictException(_) => {
                RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
            }
            PutItemError::InternalServerError(_) => {
                RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
            }
            err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
        },
    }
}
