// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]
//! Look up Swedish words in Svenska Akademiens ordlista and render their inflections.

#[cfg(feature = "client")]
pub mod client;
mod error;
pub mod format;
pub mod grammar;
pub mod page;
pub mod prompt;
mod query;
pub mod resolver;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
pub use error::Error;
pub use prompt::Prompt;
pub use query::Query;
pub use resolver::{Fetch, Resolver};
pub use types::{WordRecord, normalize_word_class};
