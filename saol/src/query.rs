//! Queries and the URLs they are looked up at.

use std::fmt::{self, Display};

use url::Url;

use crate::Error;

/// The name of the query parameter used to search for a word.
const SEARCH_PARAM: &str = "sok";
/// The name of the query parameter used to look up an entry by its identifier.
const ID_PARAM: &str = "id";

/// Something to look up in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// A free-text search for a word, e.g. `bil`.
    Word(String),
    /// A direct lookup of an entry by its identifier.
    Id(String),
}

impl Query {
    /// Returns the searched word or identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Query::Word(value) | Query::Id(value) => value,
        }
    }

    /// Returns the URL of the page answering this query, relative to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not a valid URL.
    pub fn url(&self, base_url: &str) -> Result<Url, Error> {
        let (param, value) = match self {
            Query::Word(word) => (SEARCH_PARAM, word),
            Query::Id(id) => (ID_PARAM, id),
        };

        Ok(Url::parse_with_params(base_url, &[(param, value)])?)
    }
}

impl Display for Query {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Word(word) => write!(fmt, "{word}"),
            Query::Id(id) => write!(fmt, "id {id}"),
        }
    }
}
