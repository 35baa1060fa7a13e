mod common;

use common::{catalog_of, config, init_logging, loaded};
use snippet_core::{
    update, AppState, ClipboardKind, DeepLink, Effect, Msg, NoticeLevel, SessionConfig, Theme,
};
use url::Url;

#[test]
fn copy_code_uses_active_card() {
    init_logging();
    let (state, _) = loaded(config(10), catalog_of(12));
    let (state, _) = update(state, Msg::CardChanged { index: 2 });
    let expected = state.window()[2].code.clone();

    let (_state, effects) = update(state, Msg::CopyCodeClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyText {
            kind: ClipboardKind::Code,
            text: expected,
        }]
    );
}

#[test]
fn share_builds_url_from_base() {
    init_logging();
    let cfg = SessionConfig {
        share_base: Some(Url::parse("https://deck.example/").unwrap()),
        deep_link: Some(DeepLink::new("typescript", "30_s4")),
        ..config(10)
    };
    let (state, _) = loaded(cfg, catalog_of(12));

    let (_state, effects) = update(state, Msg::ShareClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyText {
            kind: ClipboardKind::ShareUrl,
            text: "https://deck.example/?language=typescript&id=30_s4".to_string(),
        }]
    );
}

#[test]
fn share_without_base_copies_query() {
    init_logging();
    let (state, _) = loaded(config(10), catalog_of(3));
    let id = state.window()[0].id.clone();

    let (_state, effects) = update(state, Msg::ShareClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyText {
            kind: ClipboardKind::ShareUrl,
            text: format!("?language=typescript&id={id}"),
        }]
    );
}

#[test]
fn capture_targets_focused_card() {
    init_logging();
    let (state, _) = loaded(config(10), catalog_of(3));
    let id = state.window()[1].id.clone();
    let (state, _) = update(state, Msg::CardChanged { index: 1 });

    let (_state, effects) = update(state, Msg::CopyImageClicked);

    assert_eq!(effects, vec![Effect::CaptureCard { snippet_id: id }]);
}

#[test]
fn actions_need_a_card() {
    init_logging();
    let (state, effects) = update(AppState::default(), Msg::CopyCodeClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::SessionStarted);
    let (_, effects) = update(state, Msg::ShareClicked);
    assert!(effects.is_empty());
}

#[test]
fn clipboard_results_become_notices() {
    init_logging();
    let (state, _) = update(
        AppState::default(),
        Msg::ClipboardDone {
            kind: ClipboardKind::ShareUrl,
            result: Ok(()),
        },
    );
    let notice = state.view().notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "URL has been copied to clipboard");

    let (state, _) = update(
        state,
        Msg::ClipboardDone {
            kind: ClipboardKind::CardImage,
            result: Err("clipboard not available".to_string()),
        },
    );
    let notice = state.view().notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(
        notice.message,
        "Could not copy card snapshot: clipboard not available"
    );

    let (state, _) = update(state, Msg::NoticeDismissed);
    assert_eq!(state.view().notice, None);
}

#[test]
fn clipboard_failure_leaves_browsing_untouched() {
    init_logging();
    let (state, _) = loaded(config(10), catalog_of(12));
    let (state, _) = update(state, Msg::CardChanged { index: 4 });
    let catalog = state.catalog().clone();

    let (state, _) = update(
        state,
        Msg::ClipboardDone {
            kind: ClipboardKind::CardImage,
            result: Err("permission denied".to_string()),
        },
    );

    assert_eq!(state.view().active_index, 4);
    assert!(state.catalog().same_ordering(&catalog));
}

#[test]
fn theme_toggle_restyles_without_reloading() {
    init_logging();
    let (state, _) = loaded(config(10), catalog_of(25));
    let (state, _) = update(state, Msg::CardChanged { index: 10 });
    let before = state.view();
    assert_eq!(before.theme, Theme::Dark);

    let (mut state, effects) = update(state, Msg::ThemeToggled);

    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Light)]);
    assert!(state.consume_dirty());
    let after = state.view();
    assert_eq!(after.theme, Theme::Light);
    assert_eq!(after.page_index, before.page_index);
    assert_eq!(after.cards, before.cards);
}
