use serde_json::Value;
use snippet_core::{normalize, Catalog, DuplicateIdError, RawEntry};
use snippet_logging::{snippet_debug, snippet_info, snippet_warn};

use crate::{FetchCache, FetchError};

pub const DEFAULT_LANGUAGE: &str = "typescript";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("feed is not valid JSON: {0}")]
    Parse(String),
    #[error("feed must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),
}

/// Fetches the feed through the cache and turns it into a `Catalog`.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    cache: FetchCache,
    language: String,
}

impl CatalogLoader {
    pub fn new(cache: FetchCache, language: impl Into<String>) -> Self {
        Self {
            cache,
            language: language.into(),
        }
    }

    pub async fn load(&self, url: &str) -> Result<Catalog, LoadError> {
        let fetched = self
            .cache
            .fetch(url, |bytes| parse_feed(bytes, &self.language))
            .await?;
        snippet_info!(
            "loaded {} snippets from {} (cache: {})",
            fetched.value.len(),
            url,
            fetched.metadata.from_cache
        );
        Ok(fetched.value)
    }
}

/// Parse a feed document: a JSON object whose values are `{ prefix, body }`.
///
/// Values that do not fit the schema, and entries without body lines, are
/// skipped. Source key order is kept.
pub fn parse_feed(bytes: &[u8], language: &str) -> Result<Catalog, LoadError> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|err| LoadError::Parse(err.to_string()))?;
    let entries = match document {
        Value::Object(entries) => entries,
        other => return Err(LoadError::NotAnObject(kind_of(&other))),
    };

    let total = entries.len();
    let mut snippets = Vec::with_capacity(total);
    for (key, value) in entries {
        let entry: RawEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(err) => {
                snippet_warn!("skipping feed entry {}: {}", key, err);
                continue;
            }
        };
        match normalize(&entry, language) {
            Some(snippet) => snippets.push(snippet),
            None => snippet_debug!("skipping feed entry {}: empty body", key),
        }
    }
    if snippets.len() < total {
        snippet_info!("kept {} of {} feed entries", snippets.len(), total);
    }

    Ok(Catalog::new(snippets)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
