mod error;
mod http_mapping;

pub use error::{ApiError, SAVE_CONTACT_FAILED, UPLOAD_URL_FAILED};
pub use http_mapping::api_error_to_status_code;
