use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        contacts::submit_contact, health::livez, not_found::not_found, timeout_as_json,
        uploads::get_upload_url,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS is outermost so every response, timeouts included, allows any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/get-upload-url", post(get_upload_url))
        .route("/submit-contact", post(submit_contact));

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .layer(middleware::map_response(timeout_as_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
