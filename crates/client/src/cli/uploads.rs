//! Upload CLI commands.

use clap::Parser;

/// Request a presigned upload URL.
#[derive(Debug, Parser)]
pub struct UploadUrlCommand {
    /// Name of the file to upload.
    #[arg(long)]
    pub file_name: String,
    /// MIME type of the file.
    #[arg(long)]
    pub file_type: String,
}
