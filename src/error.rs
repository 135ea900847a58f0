//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, logging and dictionary lookups.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(code(saol::config))]
    Config(#[source] Box<figment::Error>),
    /// The HTTP client could not be built.
    #[error("Could not create HTTP client")]
    #[diagnostic(code(saol::http_client))]
    HttpClient(#[source] saol::Error),
    /// Looking up the query failed.
    #[error("Lookup failed")]
    #[diagnostic(code(saol::lookup))]
    Lookup(#[from] saol::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
