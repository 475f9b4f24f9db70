//! Process-wide presentation preferences, loaded at startup and saved on
//! change. Injected into the app rather than read as ambient globals.

use std::path::PathBuf;

/// Persisted user settings (lives in the OS config directory).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Background gradient theme name; one of `ui::theme::GRADIENTS`.
    pub gradient_theme: String,
    /// Whether the holiday overlay renders on the calendar.
    pub show_holidays: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            gradient_theme: "Midnight".into(),
            show_holidays: true,
        }
    }
}

impl Preferences {
    /// Load persisted preferences, falling back to defaults on any
    /// missing or unreadable file.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("failed to parse preferences {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist the current preferences. Failures are logged, not fatal.
    pub fn save(&self) {
        let Some(path) = Self::settings_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("failed to save preferences {:?}: {}", path, e);
                }
            }
            Err(e) => log::warn!("failed to serialize preferences: {}", e),
        }
    }

    fn settings_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "NeoTimeline")?;
        Some(dirs.config_dir().join("preferences.json"))
    }
}
