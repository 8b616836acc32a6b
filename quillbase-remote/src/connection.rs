//! The configured connection handle shared by the remote services.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};

/// Header carrying the project id on every request.
pub const PROJECT_HEADER: &str = "X-Quillbase-Project";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A configured handle to one backend endpoint/project pair.
///
/// Built once per facade and held immutably for the facade's lifetime.
/// Cloning shares the underlying HTTP client, connection pool and cookie
/// store, so clones of one connection observe the same login session.
#[derive(Debug, Clone)]
pub struct Connection {
    config: RemoteConfig,
    http: Client,
}

impl Connection {
    /// Creates a connection for the given endpoint/project pair.
    pub fn new(config: RemoteConfig) -> Self {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self { config, http }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Starts a request against `path`, with the project header set.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.endpoint.trim_end_matches('/'), path);
        self.http
            .request(method, url)
            .header(PROJECT_HEADER, &self.config.project_id)
    }
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Decodes a JSON success body, mapping non-2xx responses to
/// [`RemoteError::Api`].
pub(crate) async fn expect_json<T: DeserializeOwned>(response: Response) -> RemoteResult<T> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// Discards the body of a success response.
pub(crate) async fn expect_ok(response: Response) -> RemoteResult<()> {
    check_status(response).await.map(|_| ())
}

async fn check_status(response: Response) -> RemoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);

    Err(RemoteError::Api {
        status: status.as_u16(),
        message,
    })
}
