//! Command-line entry point.

use argh::FromArgs;
use tracing::trace;

use saol::{Query, Resolver, normalize_word_class};
use saol_cli::{Config, Error, StdinPrompt, consts, http};

/// Look up a Swedish word in Svenska Akademiens ordlista
#[derive(Debug, FromArgs)]
struct Opts {
    /// the word to look up, or an entry id when --id is given
    #[argh(positional)]
    query: String,
    /// treat the query as an entry id
    #[argh(switch, short = 'i')]
    id: bool,
    /// only accept entries of this word class, e.g. substantiv
    #[argh(option, short = 't', long = "type")]
    word_class: Option<String>,
    /// path to config file
    #[argh(option, short = 'c', default = "String::from(consts::DEFAULT_CONFIG_PATH)")]
    config: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    // Load configuration from file and environment
    let config = Config::load(&opts.config).map_err(Error::from)?;

    // Initialize logging
    saol_cli::tracing::try_init(&config.tracing)?;

    trace!(?opts, "parsed options");

    let client = http::build_client(&config.http).map_err(Error::HttpClient)?;
    let resolver = Resolver::new(client).with_max_hops(config.resolver.max_hops);
    let query = if opts.id {
        Query::Id(opts.query)
    } else {
        Query::Word(opts.query)
    };
    let word_class = opts.word_class.as_deref().map(normalize_word_class);
    let mut prompt = StdinPrompt::new();

    let report = resolver
        .resolve(query, word_class.as_deref(), &mut prompt)
        .await
        .map_err(Error::Lookup)?;

    println!("{report}");

    Ok(())
}
