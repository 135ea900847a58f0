//! Constants shared by the command-line tool.

use std::time::Duration;

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The default path of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "saol.toml";

/// The prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "SAOL_";

/// The log filter used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
