use crate::{AppState, ClipboardKind, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            if state.session() == SessionState::Idle {
                vec![state.begin_load()]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogLoaded {
            request_id,
            catalog,
        } => {
            // Late or superseded results are dropped, never applied twice.
            if state.accepts(request_id) {
                state.apply_loaded(catalog);
            }
            Vec::new()
        }
        Msg::CatalogFailed { request_id, reason } => {
            if state.accepts(request_id) {
                state.apply_failed(reason);
            }
            Vec::new()
        }
        Msg::RetryClicked => {
            if state.session() == SessionState::LoadFailed {
                vec![state.begin_load()]
            } else {
                Vec::new()
            }
        }
        Msg::CardChanged { index } => {
            if state.session() == SessionState::Browsing {
                state.change_card(index)
            } else {
                Vec::new()
            }
        }
        Msg::NextCard => {
            if state.session() == SessionState::Browsing {
                let next = state.active_index() + 1;
                state.change_card(next)
            } else {
                Vec::new()
            }
        }
        Msg::PreviousCard => match state.active_index().checked_sub(1) {
            Some(previous) if state.session() == SessionState::Browsing => {
                state.change_card(previous)
            }
            _ => Vec::new(),
        },
        Msg::RestartClicked => {
            if state.session() == SessionState::Browsing {
                state.restart()
            } else {
                Vec::new()
            }
        }
        Msg::BackHomeClicked => {
            if state.session() == SessionState::Selected {
                state.back_home()
            } else {
                Vec::new()
            }
        }
        Msg::ThemeToggled => vec![state.toggle_theme()],
        Msg::CopyCodeClicked => match state.focused() {
            Some(snippet) => vec![Effect::CopyText {
                kind: ClipboardKind::Code,
                text: snippet.code.clone(),
            }],
            None => Vec::new(),
        },
        Msg::ShareClicked => match state.focused() {
            Some(snippet) => vec![Effect::CopyText {
                kind: ClipboardKind::ShareUrl,
                text: state.share_text(snippet),
            }],
            None => Vec::new(),
        },
        Msg::CopyImageClicked => match state.focused() {
            Some(snippet) => vec![Effect::CaptureCard {
                snippet_id: snippet.id.clone(),
            }],
            None => Vec::new(),
        },
        Msg::ClipboardDone { kind, result } => {
            state.clipboard_finished(kind, result);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.set_notice(None);
            Vec::new()
        }
    };

    (state, effects)
}
