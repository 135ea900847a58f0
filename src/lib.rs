//! Command-line frontend for looking up Swedish words in Svenska Akademiens ordlista.

pub mod config;
pub mod consts;
mod error;
pub mod http;
pub mod prompt;
pub mod tracing;

pub use config::Config;
pub use error::Error;
pub use prompt::StdinPrompt;
