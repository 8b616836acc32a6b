//! Authentication facade.

use quillbase_remote::{AccountsApi, Connection, unique_id};
use quillbase_types::{Account, Session};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Facade over the identity service.
///
/// Each operation keeps its own failure contract: account creation fails
/// loud, login wraps the failure message, current-user lookup absorbs
/// failures to `None`, and logout only logs.
#[derive(Debug, Clone)]
pub struct AuthClient {
    accounts: AccountsApi,
}

impl AuthClient {
    /// Wraps the injected connection. The connection is held for the
    /// facade's lifetime and never reconfigured.
    pub fn new(conn: Connection) -> Self {
        Self {
            accounts: AccountsApi::new(conn),
        }
    }

    /// Creates an account and immediately opens a session for it, so a
    /// successful signup always yields a live session rather than the raw
    /// account record. Remote failures propagate unchanged.
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, AuthError> {
        let account = self
            .accounts
            .create(&unique_id(), email, password, name)
            .await?;

        debug!("account {} created, opening its first session", account.id);
        self.login(email, password).await
    }

    /// Opens an email/password session. On failure the remote error is
    /// collapsed to its message text under the `"Login failed: "` contract.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match self.accounts.create_email_session(email, password).await {
            Ok(session) => {
                info!("login succeeded for {email}");
                Ok(session)
            }
            Err(e) => Err(AuthError::LoginFailed(e.to_string())),
        }
    }

    /// Returns the account behind the current session, or `None` when there
    /// is no session or the lookup fails. The two cases are not
    /// distinguishable here.
    pub async fn current_user(&self) -> Option<Account> {
        match self.accounts.get().await {
            Ok(account) => Some(account),
            Err(e) => {
                debug!("current user unavailable: {e}");
                None
            }
        }
    }

    /// Deletes every session of the current account. Failures are logged
    /// and otherwise invisible to the caller.
    pub async fn logout(&self) {
        match self.accounts.delete_sessions().await {
            Ok(()) => info!("logged out"),
            Err(e) => warn!("logout failed: {e}"),
        }
    }
}
