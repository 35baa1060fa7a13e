//! Snippet engine: feed fetching, caching and catalog loading.
mod cache;
mod cache_key;
mod engine;
mod fetch;
mod loader;
mod persist;
mod types;

pub use cache::{
    CacheError, CacheStore, CachedResponse, DirCacheStore, FetchCache, Fetched, MemoryCacheStore,
};
pub use cache_key::cache_file_name;
pub use engine::{EngineEvents, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{parse_feed, CatalogLoader, LoadError, DEFAULT_LANGUAGE};
pub use persist::{ensure_dir, read_if_exists, remove_if_exists, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
