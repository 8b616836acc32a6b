//! Document store operations.
//!
//! The backend addresses documents by database, collection and document id
//! on every call; callers supply all three. Data shapes are generic: the
//! collection's schema is whatever the caller serializes.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::connection::{Connection, expect_json, expect_ok};
use crate::error::RemoteResult;
use crate::query::Query;

/// Client for the document store.
#[derive(Debug, Clone)]
pub struct DocumentsApi {
    conn: Connection,
}

impl DocumentsApi {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn collection_path(database_id: &str, collection_id: &str) -> String {
        format!(
            "/v1/databases/{}/collections/{}/documents",
            urlencoding::encode(database_id),
            urlencoding::encode(collection_id),
        )
    }

    fn document_path(database_id: &str, collection_id: &str, document_id: &str) -> String {
        format!(
            "{}/{}",
            Self::collection_path(database_id, collection_id),
            urlencoding::encode(document_id),
        )
    }

    /// Creates a document under a caller-chosen id.
    pub async fn create<D, T>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &D,
    ) -> RemoteResult<T>
    where
        D: Serialize,
        T: DeserializeOwned,
    {
        debug!("creating document {document_id} in {database_id}/{collection_id}");

        let body = serde_json::json!({
            "documentId": document_id,
            "data": serde_json::to_value(data)?,
        });

        let path = Self::collection_path(database_id, collection_id);
        let response = self
            .conn
            .request(Method::POST, &path)
            .json(&body)
            .send()
            .await?;

        expect_json(response).await
    }

    /// Replaces a document's data with exactly what is supplied.
    pub async fn update<D, T>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &D,
    ) -> RemoteResult<T>
    where
        D: Serialize,
        T: DeserializeOwned,
    {
        debug!("updating document {document_id} in {database_id}/{collection_id}");

        let body = serde_json::json!({
            "data": serde_json::to_value(data)?,
        });

        let path = Self::document_path(database_id, collection_id, document_id);
        let response = self
            .conn
            .request(Method::PATCH, &path)
            .json(&body)
            .send()
            .await?;

        expect_json(response).await
    }

    pub async fn get<T>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> RemoteResult<T>
    where
        T: DeserializeOwned,
    {
        let path = Self::document_path(database_id, collection_id, document_id);
        let response = self.conn.request(Method::GET, &path).send().await?;
        expect_json(response).await
    }

    pub async fn delete(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> RemoteResult<()> {
        debug!("deleting document {document_id} in {database_id}/{collection_id}");

        let path = Self::document_path(database_id, collection_id, document_id);
        let response = self.conn.request(Method::DELETE, &path).send().await?;
        expect_ok(response).await
    }

    /// Lists documents matching the given pass-through queries.
    pub async fn list<T>(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> RemoteResult<T>
    where
        T: DeserializeOwned,
    {
        let path = Self::collection_path(database_id, collection_id);
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|query| ("queries[]", query.to_wire()))
            .collect();

        let response = self
            .conn
            .request(Method::GET, &path)
            .query(&params)
            .send()
            .await?;

        expect_json(response).await
    }
}
