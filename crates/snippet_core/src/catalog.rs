use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::Snippet;

/// Ordered, immutable set of snippets for one session.
///
/// Cloning is cheap and shares the underlying slice; a reshuffle builds a new
/// `Catalog`, so holders of an older ordering keep seeing it unchanged.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    snippets: Arc<[Snippet]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdError {
    pub id: String,
}

impl fmt::Display for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate snippet id {}", self.id)
    }
}

impl std::error::Error for DuplicateIdError {}

impl Catalog {
    /// Build a catalog, rejecting the first repeated `id`.
    pub fn new(snippets: Vec<Snippet>) -> Result<Self, DuplicateIdError> {
        let mut seen = HashSet::with_capacity(snippets.len());
        for snippet in &snippets {
            if !seen.insert(snippet.id.as_str()) {
                return Err(DuplicateIdError {
                    id: snippet.id.clone(),
                });
            }
        }
        Ok(Self::from_unique(snippets))
    }

    pub(crate) fn from_unique(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets: snippets.into(),
        }
    }

    pub fn as_slice(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn ids(&self) -> Vec<&str> {
        self.snippets.iter().map(|s| s.id.as_str()).collect()
    }

    /// True when both catalogs share the same allocation.
    pub fn same_ordering(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.snippets, &other.snippets)
    }
}

impl Deref for Catalog {
    type Target = [Snippet];

    fn deref(&self) -> &[Snippet] {
        &self.snippets
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.snippets.len())
            .finish()
    }
}
