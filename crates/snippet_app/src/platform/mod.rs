mod app;
mod clipboard;
mod effects;
mod input;
mod prefs;
mod ui;

pub use app::run_app;
pub use prefs::PrefsStore;
