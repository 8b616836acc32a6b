//! File bucket operations.

use quillbase_types::{FilePayload, StoredFile};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::connection::{Connection, expect_json, expect_ok};
use crate::error::RemoteResult;

const UPLOAD_BOUNDARY: &str = "quillbase_upload_boundary";

/// Client for the file bucket.
#[derive(Debug, Clone)]
pub struct StorageApi {
    conn: Connection,
}

impl StorageApi {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn bucket_path(bucket_id: &str) -> String {
        format!("/v1/storage/buckets/{}/files", urlencoding::encode(bucket_id))
    }

    fn file_path(bucket_id: &str, file_id: &str) -> String {
        format!(
            "{}/{}",
            Self::bucket_path(bucket_id),
            urlencoding::encode(file_id),
        )
    }

    /// Uploads a file under a caller-supplied unique id.
    pub async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        payload: &FilePayload,
    ) -> RemoteResult<StoredFile> {
        debug!(
            "uploading {} ({} bytes) as {file_id}",
            payload.file_name,
            payload.bytes.len()
        );

        // multipart/form-data built by hand; routing the payload through a
        // string type would corrupt binary content.
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{UPLOAD_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"fileId\"\r\n\r\n\
                 {file_id}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{UPLOAD_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\
                 Content-Type: {}\r\n\r\n",
                payload.file_name,
                payload.content_type(),
            )
            .as_bytes(),
        );
        body.extend_from_slice(&payload.bytes);
        body.extend_from_slice(format!("\r\n--{UPLOAD_BOUNDARY}--\r\n").as_bytes());

        let response = self
            .conn
            .request(Method::POST, &Self::bucket_path(bucket_id))
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={UPLOAD_BOUNDARY}"),
            )
            .body(body)
            .send()
            .await?;

        let file: StoredFile = expect_json(response).await?;
        info!("uploaded file {} (id: {})", file.name, file.id);
        Ok(file)
    }

    /// Deletes a file from the bucket. The post collection is not touched;
    /// documents referencing the file keep their dangling id.
    pub async fn delete_file(&self, bucket_id: &str, file_id: &str) -> RemoteResult<()> {
        debug!("deleting file {file_id}");

        let response = self
            .conn
            .request(Method::DELETE, &Self::file_path(bucket_id, file_id))
            .send()
            .await?;

        expect_ok(response).await
    }

    /// Builds the preview reference for a stored file. Pure URL shaping,
    /// no remote call; the project id travels in the URL so the reference
    /// works outside an authenticated client.
    #[must_use]
    pub fn file_preview_url(&self, bucket_id: &str, file_id: &str) -> String {
        let config = self.conn.config();
        format!(
            "{}{}/preview?project={}",
            config.endpoint.trim_end_matches('/'),
            Self::file_path(bucket_id, file_id),
            urlencoding::encode(&config.project_id),
        )
    }
}
