//! Content facade: post documents and their files.

use quillbase_remote::{
    AccountsApi, Connection, ContentConfig, DocumentsApi, Query, StorageApi, unique_id,
};
use quillbase_types::{
    FilePayload, ImageSource, PostData, PostDocument, PostDraft, PostList, PostStatus,
    PostUpdate, StoredFile,
};
use tracing::{debug, info, warn};

/// Facade over the document store and the file bucket, plus a read-only
/// identity accessor.
///
/// CRUD failures are absorbed: creates, updates and reads return `None`,
/// deletes return `false`, with the cause visible only in the logs. A
/// deleted post does not cascade to its referenced file; orphaned files
/// are possible and not collected here.
#[derive(Debug, Clone)]
pub struct ContentClient {
    config: ContentConfig,
    accounts: AccountsApi,
    documents: DocumentsApi,
    storage: StorageApi,
}

impl ContentClient {
    pub fn new(conn: Connection, config: ContentConfig) -> Self {
        Self {
            accounts: AccountsApi::new(conn.clone()),
            documents: DocumentsApi::new(conn.clone()),
            storage: StorageApi::new(conn),
            config,
        }
    }

    /// Creates a post under the caller-chosen slug.
    ///
    /// A raw image payload is uploaded first and the stored file's id takes
    /// its place in the document; the raw bytes never reach the document
    /// store. Drafts without an owner are refused before any remote call.
    pub async fn create_post(&self, slug: &str, draft: PostDraft) -> Option<PostDocument> {
        if draft.owner_user_id.is_empty() {
            warn!("refusing to create post {slug}: owner user id is empty");
            return None;
        }

        let featured_image = match draft.featured_image {
            Some(ImageSource::Upload(payload)) => {
                let file = self.upload_file(payload).await?;
                Some(file.id)
            }
            Some(ImageSource::Reference(id)) => Some(id),
            None => None,
        };

        let data = PostData {
            title: draft.title,
            content: draft.content,
            featured_image,
            status: draft.status,
            owner_user_id: draft.owner_user_id,
        };

        match self
            .documents
            .create(
                &self.config.database_id,
                &self.config.collection_id,
                slug,
                &data,
            )
            .await
        {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("creating post {slug} failed: {e}");
                None
            }
        }
    }

    /// Replaces a post's fields with exactly what is supplied. There is no
    /// merge with the stored document; callers resupply unchanged fields.
    pub async fn update_post(&self, slug: &str, update: PostUpdate) -> Option<PostDocument> {
        match self
            .documents
            .update(
                &self.config.database_id,
                &self.config.collection_id,
                slug,
                &update,
            )
            .await
        {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("updating post {slug} failed: {e}");
                None
            }
        }
    }

    /// Deletes a post by slug. The referenced file, if any, stays in the
    /// bucket.
    pub async fn delete_post(&self, slug: &str) -> bool {
        match self
            .documents
            .delete(&self.config.database_id, &self.config.collection_id, slug)
            .await
        {
            Ok(()) => {
                info!("deleted post {slug}");
                true
            }
            Err(e) => {
                warn!("deleting post {slug} failed: {e}");
                false
            }
        }
    }

    /// Fetches a post by slug. `None` covers both "not found" and any
    /// remote failure.
    pub async fn get_post(&self, slug: &str) -> Option<PostDocument> {
        match self
            .documents
            .get(&self.config.database_id, &self.config.collection_id, slug)
            .await
        {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("fetching post {slug} failed: {e}");
                None
            }
        }
    }

    /// Lists posts. With no queries the listing is restricted to active
    /// posts; caller-supplied queries replace that default entirely.
    pub async fn get_posts(&self, queries: Option<Vec<Query>>) -> Option<PostList> {
        let queries = queries
            .unwrap_or_else(|| vec![Query::equal("status", PostStatus::Active.as_str())]);

        match self
            .documents
            .list(
                &self.config.database_id,
                &self.config.collection_id,
                &queries,
            )
            .await
        {
            Ok(list) => Some(list),
            Err(e) => {
                warn!("listing posts failed: {e}");
                None
            }
        }
    }

    /// Uploads a file to the bucket under a freshly generated id.
    pub async fn upload_file(&self, payload: FilePayload) -> Option<StoredFile> {
        let file_id = unique_id();

        match self
            .storage
            .create_file(&self.config.bucket_id, &file_id, &payload)
            .await
        {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("uploading {} failed: {e}", payload.file_name);
                None
            }
        }
    }

    pub async fn delete_file(&self, file_id: &str) -> bool {
        match self.storage.delete_file(&self.config.bucket_id, file_id).await {
            Ok(()) => {
                info!("deleted file {file_id}");
                true
            }
            Err(e) => {
                warn!("deleting file {file_id} failed: {e}");
                false
            }
        }
    }

    /// Builds the preview reference for a stored file, or the empty-string
    /// sentinel when no file id is given. Never issues a remote call.
    #[must_use]
    pub fn file_preview_url(&self, file_id: &str) -> String {
        if file_id.is_empty() {
            warn!("file preview requested without a file id");
            return String::new();
        }

        self.storage.file_preview_url(&self.config.bucket_id, file_id)
    }

    /// Returns the id of the logged-in account, or `None` when there is no
    /// session or the lookup fails.
    pub async fn user_id(&self) -> Option<String> {
        match self.accounts.get().await {
            Ok(account) => Some(account.id),
            Err(e) => {
                debug!("user id unavailable: {e}");
                None
            }
        }
    }
}
