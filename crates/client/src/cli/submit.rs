//! Form submission CLI command.

use std::path::PathBuf;

use clap::Parser;

use super::contacts::ContactFields;
use crate::error::Result;
use crate::form::{ContactForm, ResumeFile};

/// Run the full form submission.
#[derive(Debug, Parser)]
pub struct SubmitCommand {
    #[command(flatten)]
    pub contact: ContactFields,

    /// Resume file to upload.
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Resume MIME type (guessed from the extension by default).
    #[arg(long, requires = "resume")]
    pub content_type: Option<String>,
}

impl SubmitCommand {
    /// Build the form, attaching the resume from disk if one was given.
    pub async fn to_form(&self) -> Result<ContactForm> {
        let resume = match &self.resume {
            Some(path) => Some(ResumeFile::from_path(path, self.content_type.clone()).await?),
            None => None,
        };

        Ok(ContactForm {
            first_name: self.contact.first_name.clone(),
            last_name: self.contact.last_name.clone(),
            email: self.contact.email.clone(),
            phone_number: self.contact.phone_number.clone().unwrap_or_default(),
            resume,
        })
    }
}
