//! Identity service operations.

use quillbase_types::{Account, Session};
use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::connection::{Connection, expect_json, expect_ok};
use crate::error::RemoteResult;

/// Client for the identity service: accounts and sessions.
#[derive(Debug, Clone)]
pub struct AccountsApi {
    conn: Connection,
}

impl AccountsApi {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Creates an account under a caller-supplied unique id.
    pub async fn create(
        &self,
        user_id: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> RemoteResult<Account> {
        debug!("creating account {user_id} for {email}");

        let body = json!({
            "userId": user_id,
            "email": email,
            "password": password,
            "name": name,
        });

        let response = self
            .conn
            .request(Method::POST, "/v1/account")
            .json(&body)
            .send()
            .await?;

        expect_json(response).await
    }

    /// Opens an email/password session. The session cookie lands in the
    /// connection's cookie store.
    pub async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> RemoteResult<Session> {
        debug!("opening email session for {email}");

        let body = json!({
            "email": email,
            "password": password,
        });

        let response = self
            .conn
            .request(Method::POST, "/v1/account/sessions/email")
            .json(&body)
            .send()
            .await?;

        expect_json(response).await
    }

    /// Fetches the account behind the current session.
    pub async fn get(&self) -> RemoteResult<Account> {
        let response = self.conn.request(Method::GET, "/v1/account").send().await?;
        expect_json(response).await
    }

    /// Deletes every session of the current account.
    pub async fn delete_sessions(&self) -> RemoteResult<()> {
        let response = self
            .conn
            .request(Method::DELETE, "/v1/account/sessions")
            .send()
            .await?;

        expect_ok(response).await
    }
}
