use crate::{Catalog, Snippet};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page cursor over a catalog. `page_size` is fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    pub page_index: usize,
    page_size: usize,
}

/// Outcome of `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved,
    /// Went past the last page and restarted at page 0.
    Wrapped,
    /// Nothing to page through.
    Idle,
}

impl PagerState {
    /// A page size of zero is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn at_page(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    pub fn rewound(self) -> Self {
        self.at_page(0)
    }
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

pub fn compute_page_count(catalog_len: usize, page_size: usize) -> usize {
    catalog_len.div_ceil(page_size.max(1))
}

/// Slice of the current page, shortest `code` first.
///
/// Returns `None` when the cursor is beyond the last page so the caller can
/// keep showing whatever it computed last.
pub fn current_window(catalog: &Catalog, state: PagerState) -> Option<Vec<Snippet>> {
    let page_count = compute_page_count(catalog.len(), state.page_size);
    if state.page_index > page_count {
        return None;
    }
    let start = state
        .page_index
        .saturating_mul(state.page_size)
        .min(catalog.len());
    let end = start.saturating_add(state.page_size).min(catalog.len());
    let mut window = catalog[start..end].to_vec();
    // sort_by_key is stable: equal lengths keep catalog order.
    window.sort_by_key(|snippet| snippet.code.len());
    Some(window)
}

pub fn advance(state: PagerState, page_count: usize) -> (PagerState, Advance) {
    if page_count == 0 {
        return (state, Advance::Idle);
    }
    if state.page_index + 1 < page_count {
        (
            PagerState {
                page_index: state.page_index + 1,
                ..state
            },
            Advance::Moved,
        )
    } else {
        (state.rewound(), Advance::Wrapped)
    }
}
