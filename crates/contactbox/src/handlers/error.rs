use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contactbox_core::api::{api_error_to_status_code, ApiError};

/// Handler error that renders as `{"error": "..."}` with the mapped status.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = StatusCode::from_u16(api_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(self.0.to_error_response())).into_response()
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

/// Rewrites the bare 408 produced by the timeout layer as a JSON error.
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        tracing::error!("Request timed out");
        return AppError(ApiError::Timeout).into_response();
    }
    response
}
