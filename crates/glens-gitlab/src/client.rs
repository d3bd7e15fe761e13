//! HTTP client wrapper for the GitLab REST API.

use std::time::Duration;

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::Connection;
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client for the GitLab v4 REST API.
///
/// Every request carries `Authorization: Bearer <token>` and
/// `Content-Type: application/json`, and races the client's cancellation
/// token so callers tearing down do not leave requests running.
pub struct GitlabClient {
    http: Client,
    conn: Connection,
    cancel: CancellationToken,
}

impl GitlabClient {
    /// Creates a client with a fresh cancellation token.
    pub fn new(conn: Connection) -> Result<Self> {
        Self::with_cancellation(conn, CancellationToken::new())
    }

    /// Creates a client whose in-flight requests abort when `cancel` fires.
    pub fn with_cancellation(conn: Connection, cancel: CancellationToken) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Network)?;

        Ok(Self { http, conn, cancel })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The token that cancels this client's in-flight requests.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Issues an authenticated GET and returns the raw response.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = self.conn.endpoint(path);
        debug!(%url, "GET");

        let request = self
            .http
            .get(&url)
            .bearer_auth(self.conn.token())
            .header(header::CONTENT_TYPE, "application/json")
            .send();

        tokio::select! {
            // Cancellation wins over a response that became ready in the
            // same poll.
            biased;
            () = self.cancel.cancelled() => Err(Error::Cancelled),
            response = request => Ok(response?),
        }
    }

    /// GET that parses a 2xx JSON body and maps any other status to
    /// [`Error::Http`].
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else {
            Err(Error::from_status(response.status()))
        }
    }
}
