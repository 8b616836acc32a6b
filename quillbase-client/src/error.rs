//! Error types for the facade layer.

use quillbase_remote::RemoteError;
use thiserror::Error;

/// Errors surfaced by the authentication facade.
///
/// Account creation re-surfaces the remote failure unchanged; login
/// collapses it to its message text. The other operations absorb their
/// failures entirely and never produce this type.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Backend(#[from] RemoteError),

    #[error("Login failed: {0}")]
    LoginFailed(String),
}
