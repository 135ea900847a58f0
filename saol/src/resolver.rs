//! Resolution of queries into dictionary entries.
//!
//! A free-text search on SAOL either lands on the entry itself, or on a list of entries of
//! different word classes sharing the same spelling. In the latter case the resolver picks an
//! entry from the list, either by the caller's type hint or by asking the user, and follows it.
use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::page::{self, Lookup};
use crate::prompt::{Prompt, choose};
use crate::types::{ClassData, WordRecord};
use crate::{Error, Query, format};

/// The default number of disambiguation hops to follow before giving up.
pub const DEFAULT_MAX_HOPS: usize = 4;

/// A source of dictionary pages.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Returns the HTML of the page answering `query`.
    async fn fetch(&self, query: &Query) -> Result<String, Error>;
}

/// Resolves queries into words by fetching pages from a [`Fetch`] source.
#[derive(Debug)]
pub struct Resolver<F> {
    /// Where pages are fetched from.
    source: F,
    /// The maximum number of disambiguation pages to follow.
    max_hops: usize,
}

impl<F: Fetch> Resolver<F> {
    /// Creates a new resolver fetching pages from `source`.
    #[must_use]
    pub const fn new(source: F) -> Self {
        Resolver {
            source,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    /// Sets the maximum number of disambiguation pages to follow.
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Looks up `query` and renders the resulting word as a report.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`Resolver::resolve_word`], this returns:
    /// - [`Error::Unimplemented`]: If the word is a verb or an adjective.
    /// - [`Error::NotFound`]: If the word is of any other unsupported class.
    pub async fn resolve<P>(
        &self,
        query: Query,
        type_hint: Option<&str>,
        prompt: &mut P,
    ) -> Result<String, Error>
    where
        P: Prompt + ?Sized,
    {
        let name = query.value().to_string();
        let word = self.resolve_word(query, type_hint, prompt).await?;

        match word.class_data {
            ClassData::Noun(_) => format::format(&word),
            ClassData::Verb | ClassData::Adjective => Err(Error::Unimplemented(word.word_class)),
            ClassData::None => Err(Error::NotFound(name)),
        }
    }

    /// Looks up `query` and returns the word it resolves to.
    ///
    /// If `type_hint` is given, only entries of that word class are accepted. When the page for
    /// the query does not hold a matching entry, its list of entries is consulted: the first
    /// entry of the hinted class is followed, and failing that, the user picks one through
    /// `prompt`.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`]: If fetching a page fails.
    /// - [`Error::NotFound`]: If the query matches no entries at all.
    /// - [`Error::MalformedInput`]: If an entry does not have the expected shape.
    /// - [`Error::MissingElement`]: If the chosen entry link carries no identifier.
    /// - [`Error::TooManyHops`]: If more than the configured number of lists were followed.
    /// - [`Error::DisambiguationCycle`]: If a list leads back to an entry already visited.
    /// - [`Error::PromptClosed`] and [`Error::Prompt`]: If asking the user fails.
    pub async fn resolve_word<P>(
        &self,
        query: Query,
        type_hint: Option<&str>,
        prompt: &mut P,
    ) -> Result<WordRecord, Error>
    where
        P: Prompt + ?Sized,
    {
        let name = query.value().to_string();
        let mut query = query;
        let mut hint = type_hint.filter(|hint| !hint.is_empty()).map(String::from);
        let mut visited = HashSet::new();
        let mut hops = 0;

        if let Query::Id(id) = &query {
            visited.insert(id.clone());
        }

        loop {
            debug!(%query, ?hint, hops, "resolving query");

            let html = self.source.fetch(&query).await?;

            match page::interpret(&html, hint.as_deref())? {
                Lookup::Found(word) => {
                    info!(base_form = %word.base_form, word_class = %word.word_class, "resolved word");

                    return Ok(word);
                }
                Lookup::Mismatch { word_class } => {
                    debug!(%word_class, "lemma does not match the type hint");
                }
                Lookup::Missing => debug!("page has no lemma"),
            }

            if hops == self.max_hops {
                return Err(Error::TooManyHops(hops));
            }

            hops += 1;

            let listing = self.source.fetch(&query).await?;
            let options = page::disambiguation_options(&listing);

            debug!(num_options = options.len(), "found disambiguation options");

            let hinted = hint
                .as_deref()
                .and_then(|hint| options.iter().find(|option| option.word_class == hint));
            let option = match hinted {
                Some(option) => option,
                None => choose(prompt, &name, &options)?,
            };
            let id = option
                .id()
                .ok_or(Error::MissingElement("div.cshow a[href*=\"?id=\"]"))?
                .to_string();

            if !visited.insert(id.clone()) {
                return Err(Error::DisambiguationCycle(id));
            }

            hint = Some(option.word_class.clone());
            query = Query::Id(id);
        }
    }
}
