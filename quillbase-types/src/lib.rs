//! Shared model types for the Quillbase client.
//!
//! Defines the wire-facing records exchanged with the hosted backend:
//! accounts and sessions from the identity service, post documents from the
//! content collection, and stored files from the file bucket. The
//! call-shaping clients live in `quillbase-remote` and `quillbase-client`;
//! this crate is pure data.

mod account;
mod file;
mod post;

pub use account::{Account, Session};
pub use file::{FilePayload, ImageSource, StoredFile, OCTET_STREAM};
pub use post::{PostData, PostDocument, PostDraft, PostList, PostStatus, PostUpdate};

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown post status: {0}")]
    InvalidStatus(String),
}
