use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;
use log::LevelFilter;
use snippet_core::{
    DeepLink, SessionConfig, ShuffleSeed, Theme, DEFAULT_FEED_URL, DEFAULT_PAGE_SIZE,
};
use snippet_engine::DEFAULT_LANGUAGE;
use snippet_logging::LogDestination;
use url::Url;

#[derive(Debug, Parser)]
#[command(
    name = "snippet-deck",
    about = "Swipe through shuffled code snippets from a JSON feed"
)]
pub struct Cli {
    /// Feed to load: a JSON object of `{ prefix, body }` entries.
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Language tag given to every snippet in the feed.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Cards per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub page_size: usize,

    /// Open one card directly: a share URL or `?language=..&id=..`.
    #[arg(long)]
    pub link: Option<String>,

    /// Base URL for shared links.
    #[arg(long, default_value = "http://localhost:5173/")]
    pub share_base: Url,

    /// Directory for preferences, the feed cache and the log file.
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Always fetch the feed from the network.
    #[arg(long)]
    pub no_cache: bool,

    /// Fixed shuffle seed, for reproducible decks.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log destination: file, terminal, both or off.
    #[arg(long, default_value = "file", value_parser = parse_destination)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_destination(value: &str) -> Result<LogDestination, String> {
    LogDestination::from_name(value)
        .ok_or_else(|| format!("unknown log destination '{value}' (file, terminal, both, off)"))
}

impl Cli {
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".snippet_deck"))
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn session_config(&self, theme: Theme) -> SessionConfig {
        SessionConfig {
            feed_url: self.feed_url.clone(),
            page_size: self.page_size,
            deep_link: self.link.as_deref().and_then(DeepLink::parse),
            share_base: Some(self.share_base.clone()),
            theme,
            seed: self
                .seed
                .map(ShuffleSeed::new)
                .unwrap_or_else(ShuffleSeed::from_entropy),
        }
    }
}
