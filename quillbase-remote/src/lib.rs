//! Wire layer for the Quillbase hosted backend.
//!
//! Everything here is fail-loud: operations return `Result<_, RemoteError>`
//! and leave failure-shaping policy to the facades in `quillbase-client`.
//!
//! # Components
//!
//! - **Connection**: one configured endpoint/project handle per facade
//! - **AccountsApi**: identity service (accounts, sessions)
//! - **DocumentsApi**: document store CRUD and list queries
//! - **StorageApi**: file bucket upload/delete and preview references

mod accounts;
mod config;
mod connection;
mod documents;
mod error;
mod id;
mod query;
mod storage;

pub use accounts::AccountsApi;
pub use config::{ContentConfig, RemoteConfig};
pub use connection::{Connection, PROJECT_HEADER};
pub use documents::DocumentsApi;
pub use error::{RemoteError, RemoteResult};
pub use id::unique_id;
pub use query::Query;
pub use storage::StorageApi;
