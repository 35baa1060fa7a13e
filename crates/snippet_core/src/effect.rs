use crate::{DeepLink, RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog { request_id: RequestId, url: String },
    /// Rewrite the visible location to point at this card, without navigation.
    SyncLocation(DeepLink),
    ClearLocation,
    CopyText { kind: ClipboardKind, text: String },
    /// Render the given card to a snapshot and put it on the clipboard.
    CaptureCard { snippet_id: String },
    PersistTheme(Theme),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardKind {
    Code,
    ShareUrl,
    CardImage,
}

impl ClipboardKind {
    pub fn success_message(self) -> &'static str {
        match self {
            ClipboardKind::Code => "Code has been copied to clipboard",
            ClipboardKind::ShareUrl => "URL has been copied to clipboard",
            ClipboardKind::CardImage => "Card snapshot has been copied to clipboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClipboardKind::Code => "code",
            ClipboardKind::ShareUrl => "share url",
            ClipboardKind::CardImage => "card snapshot",
        }
    }
}
