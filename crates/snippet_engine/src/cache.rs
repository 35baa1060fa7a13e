use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use snippet_logging::{snippet_debug, snippet_info, snippet_warn};
use thiserror::Error;

use crate::cache_key::cache_file_name;
use crate::persist::{ensure_dir, read_if_exists, remove_if_exists, AtomicFileWriter, PersistError};
use crate::{FetchError, FetchMetadata, Fetcher};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache store lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Stored response body for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Backing store for `FetchCache`, keyed by URL.
pub trait CacheStore: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    fn get(&self, url: &str) -> Result<Option<CachedResponse>, CacheError>;

    fn put(&self, url: &str, response: &CachedResponse) -> Result<(), CacheError>;

    fn remove(&self, url: &str) -> Result<(), CacheError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MemoryCacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCacheStore")
            .field("entries", &self.len())
            .finish()
    }
}

impl CacheStore for MemoryCacheStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, url: &str) -> Result<Option<CachedResponse>, CacheError> {
        let guard = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(guard.get(url).cloned())
    }

    fn put(&self, url: &str, response: &CachedResponse) -> Result<(), CacheError> {
        let mut guard = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        guard.insert(url.to_string(), response.clone());
        Ok(())
    }

    fn remove(&self, url: &str) -> Result<(), CacheError> {
        let mut guard = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        guard.remove(url);
        Ok(())
    }
}

/// Persistent store: one file per URL under `dir`, written atomically.
///
/// Only the body is kept; hits report no content type.
#[derive(Debug, Clone)]
pub struct DirCacheStore {
    writer: AtomicFileWriter,
}

impl DirCacheStore {
    /// Opens (creating if needed) the cache directory.
    pub fn open(dir: PathBuf) -> Result<Self, CacheError> {
        ensure_dir(&dir)?;
        Ok(Self {
            writer: AtomicFileWriter::new(dir),
        })
    }
}

impl CacheStore for DirCacheStore {
    fn name(&self) -> &str {
        "directory"
    }

    fn get(&self, url: &str) -> Result<Option<CachedResponse>, CacheError> {
        let bytes = read_if_exists(self.writer.dir(), &cache_file_name(url))?;
        Ok(bytes.map(|bytes| CachedResponse {
            bytes,
            content_type: None,
        }))
    }

    fn put(&self, url: &str, response: &CachedResponse) -> Result<(), CacheError> {
        self.writer
            .write_bytes(&cache_file_name(url), &response.bytes)?;
        Ok(())
    }

    fn remove(&self, url: &str) -> Result<(), CacheError> {
        remove_if_exists(self.writer.dir(), &cache_file_name(url))?;
        Ok(())
    }
}

/// Payload decoded by the caller, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub metadata: FetchMetadata,
}

/// Fetch memoizer: the first accepted payload for a URL is stored, later
/// fetches are served from the store. Without a store every call goes to the
/// network.
///
/// Only payloads the caller's `accept` decodes are stored, so a bad response
/// never outlives the request that got it. A stored payload that `accept`
/// rejects is evicted and fetched again.
#[derive(Clone)]
pub struct FetchCache {
    fetcher: Arc<dyn Fetcher>,
    store: Option<Arc<dyn CacheStore>>,
}

impl FetchCache {
    pub fn new(fetcher: Arc<dyn Fetcher>, store: Arc<dyn CacheStore>) -> Self {
        Self {
            fetcher,
            store: Some(store),
        }
    }

    pub fn uncached(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            store: None,
        }
    }

    pub fn is_cached(&self) -> bool {
        self.store.is_some()
    }

    pub async fn fetch<T, E>(
        &self,
        url: &str,
        accept: impl Fn(&[u8]) -> Result<T, E>,
    ) -> Result<Fetched<T>, E>
    where
        E: From<FetchError> + fmt::Display,
    {
        let Some(store) = &self.store else {
            let output = self.fetcher.fetch(url).await?;
            let value = accept(&output.bytes)?;
            return Ok(Fetched {
                value,
                metadata: output.metadata,
            });
        };

        match store.get(url) {
            Ok(Some(hit)) => match accept(&hit.bytes) {
                Ok(value) => {
                    snippet_debug!("cache hit ({}) for {}", store.name(), url);
                    return Ok(Fetched {
                        value,
                        metadata: FetchMetadata {
                            url: url.to_string(),
                            final_url: url.to_string(),
                            content_type: hit.content_type,
                            byte_len: hit.bytes.len() as u64,
                            from_cache: true,
                        },
                    });
                }
                Err(err) => {
                    snippet_warn!("evicting cached {} ({}): {}", url, store.name(), err);
                    if let Err(err) = store.remove(url) {
                        snippet_warn!("cache evict failed ({}) for {}: {}", store.name(), url, err);
                    }
                }
            },
            Ok(None) => snippet_debug!("cache miss ({}) for {}", store.name(), url),
            Err(err) => snippet_warn!("cache read failed ({}) for {}: {}", store.name(), url, err),
        }

        let output = self.fetcher.fetch(url).await?;
        let value = accept(&output.bytes)?;
        let entry = CachedResponse {
            bytes: output.bytes,
            content_type: output.metadata.content_type.clone(),
        };
        match store.put(url, &entry) {
            Ok(()) => snippet_info!("cached {} bytes for {}", entry.bytes.len(), url),
            Err(err) => snippet_warn!("cache write failed ({}) for {}: {}", store.name(), url, err),
        }
        Ok(Fetched {
            value,
            metadata: output.metadata,
        })
    }
}

impl fmt::Debug for FetchCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchCache")
            .field("store", &self.store.as_ref().map(|store| store.name()))
            .finish()
    }
}
