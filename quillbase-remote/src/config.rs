//! Connection and content configuration.
//!
//! All identifiers are required at construction time and are not validated
//! here; bad values surface as downstream call failures. The `from_env`
//! constructors mirror the deployment convention of configuring the client
//! entirely through `QUILLBASE_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{RemoteError, RemoteResult};

/// Addressing for the hosted backend: endpoint URL plus project id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the backend, e.g. `https://cloud.quillbase.io`.
    pub endpoint: String,
    /// Project (tenant) identifier sent with every request.
    pub project_id: String,
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            project_id: project_id.into(),
        }
    }

    /// Reads `QUILLBASE_ENDPOINT` and `QUILLBASE_PROJECT_ID`.
    pub fn from_env() -> RemoteResult<Self> {
        Ok(Self {
            endpoint: require_env("QUILLBASE_ENDPOINT")?,
            project_id: require_env("QUILLBASE_PROJECT_ID")?,
        })
    }
}

/// Identifiers for the content facade: one database/collection holding the
/// posts and one bucket holding their files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    pub database_id: String,
    pub collection_id: String,
    pub bucket_id: String,
}

impl ContentConfig {
    pub fn new(
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
        bucket_id: impl Into<String>,
    ) -> Self {
        Self {
            database_id: database_id.into(),
            collection_id: collection_id.into(),
            bucket_id: bucket_id.into(),
        }
    }

    /// Reads `QUILLBASE_DATABASE_ID`, `QUILLBASE_COLLECTION_ID` and
    /// `QUILLBASE_BUCKET_ID`.
    pub fn from_env() -> RemoteResult<Self> {
        Ok(Self {
            database_id: require_env("QUILLBASE_DATABASE_ID")?,
            collection_id: require_env("QUILLBASE_COLLECTION_ID")?,
            bucket_id: require_env("QUILLBASE_BUCKET_ID")?,
        })
    }
}

fn require_env(name: &str) -> RemoteResult<String> {
    std::env::var(name).map_err(|_| RemoteError::Config(format!("{name} is not set")))
}
