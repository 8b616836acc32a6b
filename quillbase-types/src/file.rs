//! Stored files and upload payloads for the file bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback MIME type for uploads that don't declare one.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Raw bytes to upload to the file bucket.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl FilePayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// MIME type sent with the upload.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(OCTET_STREAM)
    }
}

/// Image input for post creation: either the id of an already stored file
/// or a raw payload to upload first.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Reference(String),
    Upload(FilePayload),
}

impl ImageSource {
    pub fn reference(id: impl Into<String>) -> Self {
        Self::Reference(id.into())
    }

    pub fn upload(payload: FilePayload) -> Self {
        Self::Upload(payload)
    }
}

/// A file record as returned by the bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    /// Unique id assigned at upload time; referenced by
    /// [`PostDocument::featured_image`](crate::PostDocument).
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "sizeOriginal", default)]
    pub size: u64,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(rename = "$createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}
