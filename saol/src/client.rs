//! A client for fetching pages from Svenska Akademiens ordlista (svenska.se).
//!
//! This module provides the async [`Fetch`] implementation used to resolve queries against the
//! live dictionary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::ClientBuilder;
use tracing::debug;

use crate::{Error, Fetch, Query};

/// The base URL of the dictionary's service.
pub const BASE_URL: &str = "https://svenska.se/saol/";

/// An asynchronous client for Svenska Akademiens ordlista.
///
/// This client handles the construction of HTTP requests and sending them to the dictionary
/// service. Parsing the returned pages is left to [`crate::page`].
#[derive(Debug)]
pub struct Client {
    /// The base URL of the service endpoint.
    base_url: String,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Creates a client for the public SAOL site at [`BASE_URL`], with gzip enabled and a 30 second
    /// request timeout.
    ///
    /// # Panics
    ///
    /// Panics if reqwest cannot set up its TLS backend. Use [`Client::try_new`] to handle that
    /// instead.
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build. See
    /// [`ClientBuilder::build`] for more details on potential failures.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .gzip(true)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// This is useful if you require custom configuration (e.g., proxies, timeouts, custom
    /// headers).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let base_url = String::from(BASE_URL);

        Client { base_url, client }
    }

    /// Replaces the base URL that queries are resolved against.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Client {
        self.base_url = base_url.into();
        self
    }

    /// Returns the base URL that queries are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the page answering `query` and returns its HTML body.
    ///
    /// # Errors
    ///
    /// This function can fail in several ways, returning an [`Error`]:
    /// - [`Error::InvalidUrl`]: If the configured base URL is not a valid URL.
    /// - [`Error::Request`]: If the HTTP request fails due to network issues,
    ///   a timeout, or if the server returns a non-successful status code (e.g., 404, 500).
    pub async fn query(&self, query: &Query) -> Result<String, Error> {
        let url = query.url(&self.base_url)?;

        debug!(%url, "fetching page");

        let response = self.client.get(url).send().await.map_err(Error::Request)?;

        match response.error_for_status() {
            Ok(response) => response.text().await.map_err(Error::Request),
            Err(err) => Err(Error::Request(err)),
        }
    }
}

impl Default for Client {
    /// Same as [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, query: &Query) -> Result<String, Error> {
        self.query(query).await
    }
}
