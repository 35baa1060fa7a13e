#![allow(dead_code)]

use std::sync::Once;

use snippet_core::{
    normalize, update, AppState, Catalog, Effect, Msg, RawEntry, SessionConfig, ShuffleSeed,
    Snippet,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(snippet_logging::initialize_for_tests);
}

pub fn raw(prefix: &str, body: &[&str]) -> RawEntry {
    RawEntry {
        prefix: prefix.to_string(),
        body: Some(body.iter().map(|line| line.to_string()).collect()),
    }
}

/// Snippet `30_s{i}` whose code is `i + 7` bytes (`export ` plus `i` dots).
pub fn numbered(i: usize) -> Snippet {
    let code = format!("export {}", ".".repeat(i));
    normalize(&raw(&format!("30_s{i}"), &["/** doc */", &code]), "typescript")
        .expect("non-empty body")
}

pub fn catalog_of(len: usize) -> Catalog {
    Catalog::new((0..len).map(numbered).collect()).expect("unique ids")
}

pub fn config(page_size: usize) -> SessionConfig {
    SessionConfig {
        page_size,
        seed: ShuffleSeed::new(99),
        ..SessionConfig::default()
    }
}

pub fn request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::LoadCatalog { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("load effect")
}

/// Start a session and feed it `catalog` as the load result.
pub fn loaded(config: SessionConfig, catalog: Catalog) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(AppState::new(config), Msg::SessionStarted);
    let request_id = request_id(&effects);
    update(
        state,
        Msg::CatalogLoaded {
            request_id,
            catalog,
        },
    )
}

pub fn sorted_ids<'a>(snippets: impl IntoIterator<Item = &'a Snippet>) -> Vec<String> {
    let mut ids: Vec<String> = snippets.into_iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids
}
