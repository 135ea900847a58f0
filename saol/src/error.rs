use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("the word {0} was not found in SAOL")]
    NotFound(String),
    #[error("support for the word class {0} is not implemented yet")]
    Unimplemented(String),
    #[error("cannot format words of class {0:?}")]
    UnsupportedWordClass(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("could not find element using selector: {0}")]
    MissingElement(&'static str),
    #[error("could not read choice: {0}")]
    Prompt(#[from] std::io::Error),
    #[error("input closed before a valid choice was made")]
    PromptClosed,
    #[error("gave up after {0} disambiguation hop(s)")]
    TooManyHops(usize),
    #[error("disambiguation for id {0} points back to itself")]
    DisambiguationCycle(String),
}
