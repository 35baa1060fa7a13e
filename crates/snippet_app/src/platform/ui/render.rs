use snippet_core::{AppViewModel, CardView, NoticeLevel, SessionState, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Header,
    Title,
    Text,
    Muted,
    Code,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    pub text: String,
}

impl Line {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

pub const RELOAD_CARD_TEXT: &str = "Tap to reload";

/// Full screen for one view model, top to bottom.
pub fn render(view: &AppViewModel) -> Vec<Line> {
    let mut lines = vec![Line::new(LineStyle::Header, header_text(view)), blank()];

    match view.session {
        SessionState::Idle | SessionState::Loading => {
            lines.push(Line::new(LineStyle::Muted, "Loading snippets..."));
        }
        SessionState::LoadFailed => {
            let reason = view.load_error.as_deref().unwrap_or("unknown error");
            lines.push(Line::new(
                LineStyle::Error,
                format!("Could not load snippets: {reason}"),
            ));
            lines.push(Line::new(LineStyle::Muted, "Type 'retry' to try again."));
        }
        SessionState::Browsing => {
            lines.extend(deck_lines(view));
            if let Some(card) = view.active_card() {
                lines.push(blank());
                lines.extend(card_lines(card));
            }
        }
        SessionState::Selected => {
            if let Some(card) = &view.selected {
                lines.extend(card_lines(card));
            }
            lines.push(blank());
            lines.push(Line::new(
                LineStyle::Muted,
                "Type 'h' to browse all snippets.",
            ));
        }
    }

    if let Some(notice) = &view.notice {
        let style = match notice.level {
            NoticeLevel::Info => LineStyle::Info,
            NoticeLevel::Error => LineStyle::Error,
        };
        lines.push(blank());
        lines.push(Line::new(style, notice.message.clone()));
    }

    if let Some(location) = &view.location {
        lines.push(blank());
        lines.push(Line::new(LineStyle::Muted, format!("Location: ?{location}")));
    }

    lines.push(blank());
    lines.push(Line::new(LineStyle::Muted, "Command (? for help):"));
    lines
}

fn header_text(view: &AppViewModel) -> String {
    let theme = match view.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    match view.session {
        SessionState::Browsing => format!(
            "Snippet Deck | page {}/{} | {} snippets | {theme}",
            view.page_index + 1,
            view.page_count.max(1),
            view.catalog_len
        ),
        SessionState::Selected => format!("Snippet Deck | shared card | {theme}"),
        _ => format!("Snippet Deck | {theme}"),
    }
}

/// Card titles of the current window plus the trailing reload card.
fn deck_lines(view: &AppViewModel) -> Vec<Line> {
    let mut lines: Vec<Line> = view
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let marker = if i == view.active_index { '>' } else { ' ' };
            let style = if i == view.active_index {
                LineStyle::Title
            } else {
                LineStyle::Text
            };
            Line::new(style, format!("{marker} {}", card.title()))
        })
        .collect();
    // Highlighted when the next swipe lands on it.
    let reload_style = if view.at_window_end() {
        LineStyle::Info
    } else {
        LineStyle::Muted
    };
    lines.push(Line::new(
        reload_style,
        format!("  {}. {RELOAD_CARD_TEXT}", view.cards.len() + 1),
    ));
    lines
}

fn card_lines(card: &CardView) -> Vec<Line> {
    let mut lines = vec![Line::new(LineStyle::Title, card.title())];
    if let Some(description) = &card.description {
        lines.extend(text_block(LineStyle::Text, description));
    }
    lines.extend(text_block(LineStyle::Muted, &card.comment));
    lines.extend(text_block(LineStyle::Code, &card.code));
    lines
}

fn text_block(style: LineStyle, text: &str) -> Vec<Line> {
    text.trim_matches('\n')
        .lines()
        .map(|line| Line::new(style, line.trim_end()))
        .collect()
}

fn blank() -> Line {
    Line::new(LineStyle::Text, "")
}

/// Plain-text picture of a card, framed, for the "copy image" action.
pub fn card_snapshot(card: &CardView) -> String {
    let body: Vec<String> = card_lines(card).into_iter().map(|line| line.text).collect();
    let width = body
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(width + 2);

    let mut out = format!("+{rule}+\n");
    for line in &body {
        let pad = width - line.chars().count();
        out.push_str(&format!("| {line}{} |\n", " ".repeat(pad)));
    }
    out.push_str(&format!("+{rule}+\n"));
    out
}
