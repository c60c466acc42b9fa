use std::io;
use std::path::{Path, PathBuf};

/// A resume attached to the form.
///
/// Path-backed files are only read when the upload step runs.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    file_name: String,
    content_type: String,
    source: ResumeSource,
}

#[derive(Debug, Clone)]
enum ResumeSource {
    Bytes(Vec<u8>),
    Path { path: PathBuf, len: u64 },
}

impl ResumeFile {
    /// Create an in-memory resume.
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            source: ResumeSource::Bytes(bytes),
        }
    }

    /// Attach a file from disk.
    ///
    /// Without an explicit content type one is derived from the extension.
    pub async fn from_path(path: impl AsRef<Path>, content_type: Option<String>) -> io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a file path: {}", path.display()),
                )
            })?;
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ));
        }

        let content_type =
            content_type.unwrap_or_else(|| content_type_for(&file_name).to_string());

        Ok(Self {
            file_name,
            content_type,
            source: ResumeSource::Path {
                path: path.to_path_buf(),
                len: metadata.len(),
            },
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Size in bytes.
    pub fn len(&self) -> u64 {
        match &self.source {
            ResumeSource::Bytes(bytes) => bytes.len() as u64,
            ResumeSource::Path { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load the file contents.
    pub async fn read(&self) -> io::Result<Vec<u8>> {
        match &self.source {
            ResumeSource::Bytes(bytes) => Ok(bytes.clone()),
            ResumeSource::Path { path, .. } => tokio::fs::read(path).await,
        }
    }
}

/// Guess a MIME type from a file name's extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("odt") => "application/vnd.oasis.opendocument.text",
        Some("rtf") => "application/rtf",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
