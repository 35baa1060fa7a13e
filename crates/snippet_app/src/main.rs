mod cli;
mod platform;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use snippet_engine::{
    ensure_dir, CatalogLoader, DirCacheStore, EngineHandle, FetchCache, FetchSettings,
    ReqwestFetcher,
};
use snippet_logging::{log_file_path, snippet_info, snippet_warn};

use crate::cli::Cli;
use crate::platform::PrefsStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let state_dir = cli.state_dir();
    ensure_dir(&state_dir)
        .with_context(|| format!("creating state directory {}", state_dir.display()))?;
    snippet_logging::initialize(cli.log, cli.log_level(), &log_file_path(Some(&state_dir)));

    let prefs = PrefsStore::new(&state_dir);
    let config = cli.session_config(prefs.load_theme());
    snippet_info!(
        "starting: feed={} page_size={} deep_link={:?}",
        config.feed_url,
        config.page_size,
        config.deep_link
    );

    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));
    let cache = if cli.no_cache {
        FetchCache::uncached(fetcher)
    } else {
        match DirCacheStore::open(state_dir.join("cache")) {
            Ok(store) => FetchCache::new(fetcher, Arc::new(store)),
            Err(err) => {
                snippet_warn!("feed cache disabled: {}", err);
                FetchCache::uncached(fetcher)
            }
        }
    };
    let loader = CatalogLoader::new(cache, cli.language.clone());
    let (engine, events) = EngineHandle::spawn(loader).context("starting engine")?;

    platform::run_app(config, engine, events, prefs)
}
