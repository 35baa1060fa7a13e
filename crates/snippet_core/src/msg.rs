#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Front end is wired up; start the first catalog load.
    SessionStarted,
    /// Engine finished loading the feed for `request_id`.
    CatalogLoaded {
        request_id: crate::RequestId,
        catalog: crate::Catalog,
    },
    /// Engine failed to fetch or parse the feed for `request_id`.
    CatalogFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User asked to try the load again after a failure.
    RetryClicked,
    /// Deck moved to card `index` of the current window. `index == window.len()`
    /// is the trailing reload card; anything past it is ignored.
    CardChanged { index: usize },
    NextCard,
    PreviousCard,
    /// User clicked Restart: new ordering, back to page 0.
    RestartClicked,
    /// User left the single-card view.
    BackHomeClicked,
    ThemeToggled,
    CopyCodeClicked,
    ShareClicked,
    CopyImageClicked,
    /// Clipboard collaborator reported back.
    ClipboardDone {
        kind: crate::ClipboardKind,
        result: Result<(), String>,
    },
    NoticeDismissed,
}
