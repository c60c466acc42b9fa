pub mod contacts;
pub mod error;
pub mod health;
pub mod not_found;
pub mod uploads;

pub use error::{timeout_as_json, AppError};
