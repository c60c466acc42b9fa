//! Contact form submission pipeline.
//!
//! Drives the two-step flow: optional resume upload through a presigned URL,
//! then the contact submission. The network sits behind [`ContactApi`] and the
//! UI behind [`FormView`], so the same controller backs the CLI and tests.

mod api;
mod controller;
mod error;
mod file;
mod terminal;
mod view;

pub use api::ContactApi;
pub use controller::{
    contact_payload, ContactForm, FormController, SUBMITTING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE,
};
pub use error::FormError;
pub use file::{content_type_for, ResumeFile};
pub use terminal::TerminalView;
pub use view::{FormView, Status};
