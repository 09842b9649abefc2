//! Client for the users endpoint. The endpoint address comes from
//! [`AppConfig`] and is fixed for the lifetime of the service.

use crate::{
    app_lib::{get_json, AppConfig, FetchError},
    features::users::types::User,
};
use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;
use tracing::{debug, instrument};
use url::Url;

/// Anything that can produce the users list for a provider.
pub trait UserSource: Send + Sync + 'static {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct UsersService {
    client: Client,
    url: Url,
}

impl UsersService {
    /// Builds the service for the users endpoint of `config`.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let url = config
            .users_url()
            .with_context(|| format!("invalid API base URL: {}", config.api_base_url))?;

        let client = Client::builder()
            .build()
            .context("Error creating reqwest client")?;

        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches the user list; one GET per call, no retries.
    ///
    /// # Errors
    /// Returns [`FetchError`] on transport failure, non-2xx status or a body that
    /// is not a JSON array of users.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        let users: Vec<User> = get_json(&self.client, self.url.clone()).await?;
        debug!("fetched {} users", users.len());
        Ok(users)
    }
}

impl UserSource for UsersService {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.list_users().await
    }
}
