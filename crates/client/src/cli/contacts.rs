//! Contact CLI commands.

use clap::{Args, Parser};
use contactbox_core::contact::SubmitContactRequest;

/// Contact fields shared by `submit` and `contact`.
#[derive(Debug, Clone, Args)]
pub struct ContactFields {
    /// First name.
    #[arg(long)]
    pub first_name: String,
    /// Last name.
    #[arg(long)]
    pub last_name: String,
    /// Email address.
    #[arg(long)]
    pub email: String,
    /// Phone number.
    #[arg(long)]
    pub phone_number: Option<String>,
}

/// Submit contact information directly.
#[derive(Debug, Parser)]
pub struct ContactCommand {
    #[command(flatten)]
    pub contact: ContactFields,

    /// Public URL of an already uploaded resume.
    #[arg(long)]
    pub resume_url: Option<String>,
}

impl ContactCommand {
    pub fn to_request(&self) -> SubmitContactRequest {
        let fields = &self.contact;
        SubmitContactRequest {
            first_name: Some(fields.first_name.clone()),
            last_name: Some(fields.last_name.clone()),
            email: Some(fields.email.clone()),
            phone_number: fields.phone_number.clone(),
            resume_url: self.resume_url.clone(),
        }
    }
}
