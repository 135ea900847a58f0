//! Layered configuration of the command-line tool.

use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::consts;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Query resolution configuration
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

/// HTTP client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    /// The URL that dictionary queries are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum duration of a single request
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// The `User-Agent` header to send, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Query resolution configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Maximum number of disambiguation pages to follow for a single query
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,
}

/// Tracing configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Output format of log events
    #[serde(default)]
    pub format: Format,
    /// Log filter directives, used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Output format of log events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line human readable events
    #[default]
    Compact,
    /// Multi-line human readable events
    Pretty,
    /// Newline-delimited JSON objects
    Json,
}

impl Config {
    /// Loads the configuration by layering, from lowest to highest precedence, the defaults, the
    /// TOML file at `path` (if it exists) and `SAOL_`-prefixed environment variables.
    ///
    /// Nested keys are separated by `__` in environment variables, e.g. `SAOL_HTTP__TIMEOUT=10s`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
            .extract()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: default_base_url(),
            timeout: default_http_timeout(),
            user_agent: None,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            max_hops: default_max_hops(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig {
            format: Format::default(),
            filter: default_log_filter(),
        }
    }
}

/// The public SAOL site.
#[must_use]
pub fn default_base_url() -> String {
    String::from(saol::client::BASE_URL)
}

/// See [`consts::HTTP_TIMEOUT`].
#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}

/// See [`saol::resolver::DEFAULT_MAX_HOPS`].
#[must_use]
pub const fn default_max_hops() -> usize {
    saol::resolver::DEFAULT_MAX_HOPS
}

/// See [`consts::DEFAULT_LOG_FILTER`].
#[must_use]
pub fn default_log_filter() -> String {
    String::from(consts::DEFAULT_LOG_FILTER)
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load("saol.toml")?;

            assert_eq!(config, Config::default());
            assert_eq!(config.http.base_url, "https://svenska.se/saol/");
            assert_eq!(config.http.timeout, Duration::from_secs(30));
            assert_eq!(config.resolver.max_hops, 4);
            assert_eq!(config.tracing.format, Format::Compact);

            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "saol.toml",
                r#"
                [http]
                timeout = "5s"
                user_agent = "saol-cli/0.1"

                [tracing]
                format = "json"
                "#,
            )?;

            let config = Config::load("saol.toml")?;

            assert_eq!(config.http.timeout, Duration::from_secs(5));
            assert_eq!(config.http.user_agent.as_deref(), Some("saol-cli/0.1"));
            assert_eq!(config.http.base_url, default_base_url());
            assert_eq!(config.tracing.format, Format::Json);
            assert_eq!(config.tracing.filter, "warn");

            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("saol.toml", "[resolver]\nmax_hops = 2\n")?;
            jail.set_env("SAOL_RESOLVER__MAX_HOPS", "7");
            jail.set_env("SAOL_HTTP__BASE_URL", "http://localhost:8080/saol/");

            let config = Config::load("saol.toml")?;

            assert_eq!(config.resolver.max_hops, 7);
            assert_eq!(config.http.base_url, "http://localhost:8080/saol/");

            Ok(())
        });
    }

    #[test]
    fn invalid_format_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("saol.toml", "[tracing]\nformat = \"xml\"\n")?;

            assert!(Config::load("saol.toml").is_err());

            Ok(())
        });
    }
}
