//! Service facades for the Quillbase hosted backend.
//!
//! Two independent wrappers over `quillbase-remote`:
//!
//! - [`AuthClient`]: account creation, email/password login, current-user
//!   retrieval, logout.
//! - [`ContentClient`]: CRUD on one post collection and one file bucket,
//!   plus a user-id accessor.
//!
//! Each facade owns one injected [`Connection`](quillbase_remote::Connection),
//! created once and held immutably. A caller that wants both facades to
//! observe the same login session hands them clones of the same connection.
//!
//! Failure signaling is deliberately per-method, not uniform: see each
//! method's documentation. Uniformizing it would change observable behavior
//! for existing callers.
//!
//! # Example
//!
//! ```no_run
//! use quillbase_client::{AuthClient, ContentClient};
//! use quillbase_remote::{Connection, ContentConfig, RemoteConfig};
//!
//! # async fn run() {
//! let conn = Connection::new(RemoteConfig::new("https://cloud.quillbase.io", "my-project"));
//! let auth = AuthClient::new(conn.clone());
//! let content = ContentClient::new(conn, ContentConfig::new("blog", "posts", "media"));
//!
//! auth.login("author@example.com", "hunter2").await.ok();
//! let posts = content.get_posts(None).await;
//! # let _ = posts;
//! # }
//! ```

mod auth;
mod content;
mod error;

pub use auth::AuthClient;
pub use content::ContentClient;
pub use error::AuthError;
