//! CLI command definitions.

pub mod contacts;
pub mod submit;
pub mod uploads;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the contactbox API.
#[derive(Debug, Parser)]
#[command(name = "contactbox-client")]
#[command(about = "CLI client for the contactbox API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CONTACTBOX_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in and submit the contact form, uploading a resume first if given.
    Submit(submit::SubmitCommand),
    /// Request a presigned resume upload URL.
    UploadUrl(uploads::UploadUrlCommand),
    /// Submit contact information without uploading anything.
    Contact(contacts::ContactCommand),
}
