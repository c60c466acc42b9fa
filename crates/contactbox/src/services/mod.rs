//! The two operations the API exposes.
//!
//! Each service owns a collaborator handle created once at startup and turns
//! collaborator failures into the generic [`ApiError`] for its endpoint,
//! logging the cause on the way.
//!
//! [`ApiError`]: contactbox_core::api::ApiError

pub mod contacts;
pub mod uploads;

pub use contacts::ContactService;
pub use uploads::StorageGateway;
