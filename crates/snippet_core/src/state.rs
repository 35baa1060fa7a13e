use url::Url;

use crate::pager::{self, Advance, PagerState};
use crate::view_model::{AppViewModel, CardView, Notice};
use crate::{resolve, Catalog, ClipboardKind, DeepLink, Effect, ShuffleSeed, Snippet};

pub type RequestId = u64;

pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/deepakshrma/30-seconds-of-typescript/master/snippets/typescript.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    LoadFailed,
    Browsing,
    /// Single card opened from a deep link.
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Everything fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub feed_url: String,
    pub page_size: usize,
    /// Parameters from the launch URL; consulted once, on the first load.
    pub deep_link: Option<DeepLink>,
    /// Host part of shared links. Without it, shares carry only the query.
    pub share_base: Option<Url>,
    pub theme: Theme,
    pub seed: ShuffleSeed,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            page_size: pager::DEFAULT_PAGE_SIZE,
            deep_link: None,
            share_base: None,
            theme: Theme::default(),
            seed: ShuffleSeed::new(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    feed_url: String,
    share_base: Option<Url>,
    deep_link: Option<DeepLink>,
    session: SessionState,
    theme: Theme,
    seed: ShuffleSeed,
    catalog: Catalog,
    pager: PagerState,
    window: Vec<Snippet>,
    active_index: usize,
    selected: Option<Snippet>,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    load_error: Option<String>,
    notice: Option<Notice>,
    location: Option<DeepLink>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl AppState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            feed_url: config.feed_url,
            share_base: config.share_base,
            location: config.deep_link.clone(),
            deep_link: config.deep_link,
            session: SessionState::Idle,
            theme: config.theme,
            seed: config.seed,
            catalog: Catalog::default(),
            pager: PagerState::new(config.page_size),
            window: Vec::new(),
            active_index: 0,
            selected: None,
            next_request_id: 1,
            pending_request: None,
            load_error: None,
            notice: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let card = |position: Option<usize>, snippet: &Snippet| CardView {
            position,
            id: snippet.id.clone(),
            name: snippet.name.clone(),
            language: snippet.language.clone(),
            description: snippet.description.clone(),
            comment: snippet.comment.clone(),
            code: snippet.code.clone(),
        };
        AppViewModel {
            session: self.session,
            theme: self.theme,
            catalog_len: self.catalog.len(),
            page_index: self.pager.page_index,
            page_count: self.page_count(),
            cards: self
                .window
                .iter()
                .enumerate()
                .map(|(i, snippet)| card(Some(i + 1), snippet))
                .collect(),
            active_index: self.active_index,
            selected: self.selected.as_ref().map(|snippet| card(None, snippet)),
            location: self.location.as_ref().map(DeepLink::to_query),
            load_error: self.load_error.clone(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pager(&self) -> PagerState {
        self.pager
    }

    pub fn window(&self) -> &[Snippet] {
        &self.window
    }

    pub fn selected(&self) -> Option<&Snippet> {
        self.selected.as_ref()
    }

    pub fn page_count(&self) -> usize {
        pager::compute_page_count(self.catalog.len(), self.pager.page_size())
    }

    /// Returns whether the state changed since the last call, then clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Snippet the copy/share actions apply to.
    pub fn focused(&self) -> Option<&Snippet> {
        match self.session {
            SessionState::Selected => self.selected.as_ref(),
            SessionState::Browsing => self.window.get(self.active_index),
            _ => None,
        }
    }

    pub(crate) fn begin_load(&mut self) -> Effect {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(request_id);
        self.session = SessionState::Loading;
        self.load_error = None;
        self.mark_dirty();
        Effect::LoadCatalog {
            request_id,
            url: self.feed_url.clone(),
        }
    }

    /// Whether a load result for `request_id` is still wanted.
    pub(crate) fn accepts(&self, request_id: RequestId) -> bool {
        self.session == SessionState::Loading && self.pending_request == Some(request_id)
    }

    pub(crate) fn apply_loaded(&mut self, catalog: Catalog) {
        self.pending_request = None;
        self.catalog = self.seed.shuffle(&catalog);
        self.pager = self.pager.rewound();
        self.active_index = 0;
        self.refresh_window();
        self.session = SessionState::Browsing;
        self.mark_dirty();

        // Deep links only apply to a fresh visit: the link is consumed by the
        // first successful load, before any paging.
        let hit = self
            .deep_link
            .take()
            .and_then(|link| resolve(&self.catalog, &link).cloned());
        match hit {
            Some(snippet) => {
                self.selected = Some(snippet);
                self.session = SessionState::Selected;
            }
            None => self.location = None,
        }
    }

    pub(crate) fn apply_failed(&mut self, reason: String) {
        self.pending_request = None;
        self.session = SessionState::LoadFailed;
        self.load_error = Some(reason);
        self.mark_dirty();
    }

    pub(crate) fn change_card(&mut self, index: usize) -> Vec<Effect> {
        if index == self.window.len() {
            return self.turn_page();
        }
        if index > self.window.len() || index == self.active_index {
            return Vec::new();
        }
        self.active_index = index;
        self.mark_dirty();
        self.sync_location()
    }

    pub(crate) fn active_index(&self) -> usize {
        self.active_index
    }

    /// End of the window: move to the next page, reshuffling when it wraps.
    fn turn_page(&mut self) -> Vec<Effect> {
        let (pager, outcome) = pager::advance(self.pager, self.page_count());
        match outcome {
            Advance::Idle => return Vec::new(),
            Advance::Moved => self.pager = pager,
            Advance::Wrapped => {
                self.pager = pager;
                self.catalog = self.seed.shuffle(&self.catalog);
            }
        }
        self.active_index = 0;
        self.refresh_window();
        self.mark_dirty();
        self.sync_location()
    }

    pub(crate) fn restart(&mut self) -> Vec<Effect> {
        self.catalog = self.seed.shuffle(&self.catalog);
        self.pager = self.pager.rewound();
        self.active_index = 0;
        self.refresh_window();
        self.mark_dirty();
        self.sync_location()
    }

    pub(crate) fn back_home(&mut self) -> Vec<Effect> {
        self.selected = None;
        self.session = SessionState::Browsing;
        self.pager = self.pager.rewound();
        self.active_index = 0;
        self.refresh_window();
        self.location = None;
        self.mark_dirty();
        vec![Effect::ClearLocation]
    }

    pub(crate) fn toggle_theme(&mut self) -> Effect {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        Effect::PersistTheme(self.theme)
    }

    pub(crate) fn share_text(&self, snippet: &Snippet) -> String {
        let link = DeepLink::for_snippet(snippet);
        match &self.share_base {
            Some(base) => link.share_url(base).to_string(),
            None => format!("?{}", link.to_query()),
        }
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        if self.notice != notice {
            self.notice = notice;
            self.mark_dirty();
        }
    }

    pub(crate) fn clipboard_finished(&mut self, kind: ClipboardKind, result: Result<(), String>) {
        let notice = match result {
            Ok(()) => Notice::info(kind.success_message()),
            Err(reason) => Notice::error(format!("Could not copy {}: {reason}", kind.label())),
        };
        self.set_notice(Some(notice));
    }

    fn refresh_window(&mut self) {
        if let Some(window) = pager::current_window(&self.catalog, self.pager) {
            self.window = window;
        }
    }

    fn sync_location(&mut self) -> Vec<Effect> {
        match self.window.get(self.active_index) {
            Some(snippet) => {
                let link = DeepLink::for_snippet(snippet);
                self.location = Some(link.clone());
                vec![Effect::SyncLocation(link)]
            }
            None => Vec::new(),
        }
    }
}
