//! Contact submission handler.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use contactbox_core::api::ApiError;
use contactbox_core::contact::{SubmitContactRequest, SubmitContactResponse};

use crate::{handlers::AppError, state::AppState};

/// Store a contact submission (POST /api/submit-contact).
///
/// The body is parsed as JSON whatever the request's content type. A body
/// that cannot be read, oversized included, fails like malformed JSON.
#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitContactResponse>, AppError> {
    let body = body.map_err(|e| {
        tracing::error!(error = %e, "Error reading contact submission body");
        ApiError::save_contact_failed()
    })?;

    let request: SubmitContactRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Error parsing contact submission body");
        ApiError::save_contact_failed()
    })?;

    let contact_id = state.contacts.save_contact(request).await?;

    Ok(Json(SubmitContactResponse::saved(contact_id)))
}
