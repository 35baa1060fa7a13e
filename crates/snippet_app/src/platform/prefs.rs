use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snippet_core::Theme;
use snippet_engine::{ensure_dir, AtomicFileWriter};
use snippet_logging::{snippet_error, snippet_info, snippet_warn};

const PREFS_FILENAME: &str = "prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    dark_mode: bool,
}

/// Theme preference stored next to the feed cache.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    dir: PathBuf,
}

impl PrefsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Saved theme, or dark when nothing usable was saved.
    pub fn load_theme(&self) -> Theme {
        let path = self.dir.join(PREFS_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Theme::default();
            }
            Err(err) => {
                snippet_warn!("Failed to read preferences from {:?}: {}", path, err);
                return Theme::default();
            }
        };

        match ron::from_str::<PersistedPrefs>(&content) {
            Ok(prefs) => {
                snippet_info!("Loaded preferences from {:?}", path);
                if prefs.dark_mode {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            Err(err) => {
                snippet_warn!("Failed to parse preferences from {:?}: {}", path, err);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        if let Err(err) = ensure_dir(&self.dir) {
            snippet_error!("Failed to ensure state dir {:?}: {}", self.dir, err);
            return;
        }

        let prefs = PersistedPrefs {
            dark_mode: theme.is_dark(),
        };
        let content = match ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new()) {
            Ok(text) => text,
            Err(err) => {
                snippet_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        if let Err(err) = writer.write(PREFS_FILENAME, &content) {
            snippet_error!("Failed to write preferences to {:?}: {}", self.dir, err);
        }
    }
}
