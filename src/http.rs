//! HTTP features

use crate::config::HttpConfig;

/// Returns a HTTP client builder configured from `config`.
#[must_use]
pub fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
    let builder = reqwest::ClientBuilder::new()
        .gzip(true)
        .timeout(config.timeout);

    match &config.user_agent {
        Some(user_agent) => builder.user_agent(user_agent),
        None => builder,
    }
}

/// Builds a dictionary client from `config`.
///
/// # Errors
///
/// Returns [`saol::Error::BuildClient`] if the underlying HTTP client fails to build.
pub fn build_client(config: &HttpConfig) -> Result<saol::Client, saol::Error> {
    let client = builder(config)
        .build()
        .map_err(saol::Error::BuildClient)?;

    Ok(saol::Client::with_client(client).with_base_url(config.base_url.clone()))
}
