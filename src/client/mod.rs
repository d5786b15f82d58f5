//! Source of the user list.
//!
//! `UserClient` is the seam the dashboard fetches through; `HttpUserClient`
//! is the reqwest-backed implementation that talks to the real endpoint.
//! Every failure is reported as a [`FetchError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::model::User;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_USER_AGENT: &str = concat!("user-dashboard/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the current user list.
#[async_trait]
pub trait UserClient: Send + Sync {
    async fn get_users(&self) -> Result<Vec<User>, FetchError>;
}

/// Performs `GET <endpoint>` and decodes a JSON array of users.
pub struct HttpUserClient {
    client: Client,
    endpoint: Url,
}

impl HttpUserClient {
    /// Build a client for `endpoint`. `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserClient for HttpUserClient {
    async fn get_users(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::transport)?;
        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, FetchError> {
    serde_json::from_slice(body).map_err(FetchError::decode)
}
