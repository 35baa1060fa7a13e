use crate::{SessionState, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub theme: Theme,
    pub catalog_len: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub cards: Vec<CardView>,
    pub active_index: usize,
    pub selected: Option<CardView>,
    /// Current `language=..&id=..` query, if any.
    pub location: Option<String>,
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// 1-based slot in the deck; `None` for a deep-linked card.
    pub position: Option<usize>,
    pub id: String,
    pub name: String,
    pub language: String,
    pub description: Option<String>,
    pub comment: String,
    pub code: String,
}

impl CardView {
    pub fn title(&self) -> String {
        match self.position {
            Some(position) => format!("{position}. {}", self.name),
            None => self.name.clone(),
        }
    }
}

impl AppViewModel {
    pub fn active_card(&self) -> Option<&CardView> {
        match self.session {
            SessionState::Selected => self.selected.as_ref(),
            SessionState::Browsing => self.cards.get(self.active_index),
            _ => None,
        }
    }

    /// Active card is the last real one; the next swipe lands on the reload card.
    pub fn at_window_end(&self) -> bool {
        self.session == SessionState::Browsing
            && !self.cards.is_empty()
            && self.active_index + 1 == self.cards.len()
    }

    pub fn find_card(&self, id: &str) -> Option<&CardView> {
        self.selected
            .iter()
            .chain(self.cards.iter())
            .find(|card| card.id == id)
    }
}
