mod error;
mod operations;
mod requests;
mod types;

pub use error::ContactError;
pub use operations::{
    build_contact_record, format_timestamp, public_file_url, resume_object_key,
    validate_upload_request, CONTACT_SAVED_MESSAGE, RESUME_KEY_PREFIX, UPLOAD_URL_EXPIRY_SECS,
};
pub use requests::{
    ErrorResponse, SubmitContactRequest, SubmitContactResponse, UploadUrlRequest,
    UploadUrlResponse,
};
pub use types::{ContactRecord, UploadGrant};
