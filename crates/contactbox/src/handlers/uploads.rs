//! Resume upload URL handler.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use contactbox_core::api::ApiError;
use contactbox_core::contact::{UploadUrlRequest, UploadUrlResponse};

use crate::{handlers::AppError, state::AppState};

/// Issue a presigned upload URL (POST /api/get-upload-url).
///
/// The body is parsed as JSON whatever the request's content type. A body
/// that cannot be read, oversized included, fails like malformed JSON.
#[axum::debug_handler]
pub async fn get_upload_url(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let body = body.map_err(|e| {
        tracing::error!(error = %e, "Error reading upload URL request body");
        ApiError::upload_url_failed()
    })?;

    let request: UploadUrlRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Error parsing upload URL request body");
        ApiError::upload_url_failed()
    })?;

    let grant = state.uploads.issue_upload_grant(&request).await?;

    Ok(Json(grant.into()))
}
