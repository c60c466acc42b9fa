//! contactbox_client - client library and CLI for the contactbox API.

pub mod cli;
pub mod client;
pub mod error;
pub mod form;
pub mod output;

pub use client::ContactboxClient;
pub use error::{ClientError, Result};
pub use form::{ContactApi, ContactForm, FormController, FormError, FormView, ResumeFile};
