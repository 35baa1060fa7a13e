use std::io::Write;

use snippet_core::{AppViewModel, ClipboardKind, Effect, Msg};
use snippet_engine::EngineHandle;
use snippet_logging::{snippet_debug, snippet_info, snippet_warn};

use super::clipboard::ClipboardSink;
use super::prefs::PrefsStore;
use super::ui;

/// Carries out effects from `update`. Clipboard results come back as messages.
pub struct EffectRunner<C: ClipboardSink, W: Write> {
    engine: EngineHandle,
    prefs: PrefsStore,
    clipboard: C,
    title_out: W,
}

impl<C: ClipboardSink, W: Write> EffectRunner<C, W> {
    pub fn new(engine: EngineHandle, prefs: PrefsStore, clipboard: C, title_out: W) -> Self {
        Self {
            engine,
            prefs,
            clipboard,
            title_out,
        }
    }

    /// `view` is the state the effects were produced in.
    pub fn run(&mut self, effects: Vec<Effect>, view: &AppViewModel) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::LoadCatalog { request_id, url } => {
                    snippet_info!("LoadCatalog request_id={} url={}", request_id, url);
                    self.engine.load(request_id, url);
                }
                Effect::SyncLocation(link) => {
                    let query = link.to_query();
                    snippet_debug!("SyncLocation ?{}", query);
                    self.set_title(Some(&query));
                }
                Effect::ClearLocation => {
                    snippet_debug!("ClearLocation");
                    self.set_title(None);
                }
                Effect::CopyText { kind, text } => {
                    follow_ups.push(self.copy(kind, &text));
                }
                Effect::CaptureCard { snippet_id } => {
                    let msg = match view.find_card(&snippet_id) {
                        Some(card) => {
                            let snapshot = ui::render::card_snapshot(card);
                            self.copy(ClipboardKind::CardImage, &snapshot)
                        }
                        None => Msg::ClipboardDone {
                            kind: ClipboardKind::CardImage,
                            result: Err(format!("card {snippet_id} is not on screen")),
                        },
                    };
                    follow_ups.push(msg);
                }
                Effect::PersistTheme(theme) => {
                    snippet_info!("PersistTheme {:?}", theme);
                    self.prefs.save_theme(theme);
                }
            }
        }
        follow_ups
    }

    fn copy(&mut self, kind: ClipboardKind, text: &str) -> Msg {
        let result = self.clipboard.set_text(text).map_err(|err| {
            snippet_warn!("Copy {} failed: {}", kind.label(), err);
            err.to_string()
        });
        Msg::ClipboardDone { kind, result }
    }

    fn set_title(&mut self, query: Option<&str>) {
        if let Err(err) = ui::set_location(&mut self.title_out, query) {
            snippet_warn!("Failed to update terminal title: {}", err);
        }
    }
}
