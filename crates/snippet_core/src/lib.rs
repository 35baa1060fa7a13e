//! Snippet deck core: feed normalization, paging, shuffling and the pure
//! session state machine.
mod catalog;
mod deep_link;
mod effect;
mod msg;
pub mod pager;
mod shuffle;
mod snippet;
mod state;
mod update;
mod view_model;

#[cfg(test)]
mod test_support;

pub use catalog::{Catalog, DuplicateIdError};
pub use deep_link::{resolve, DeepLink};
pub use effect::{ClipboardKind, Effect};
pub use msg::Msg;
pub use pager::{Advance, PagerState, DEFAULT_PAGE_SIZE};
pub use shuffle::{shuffled, ShuffleSeed};
pub use snippet::{display_name, normalize, RawEntry, Snippet, CODE_MARKER, FEED_ID_PREFIX};
pub use state::{AppState, RequestId, SessionConfig, SessionState, Theme, DEFAULT_FEED_URL};
pub use update::update;
pub use view_model::{AppViewModel, CardView, Notice, NoticeLevel};
