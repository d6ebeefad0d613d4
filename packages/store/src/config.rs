//! # Application configuration: `kiddonotes.toml`
//!
//! Defines the TOML configuration bundled with the web build (filename:
//! [`AppConfig::filename`] = `"kiddonotes.toml"`). It tells the client where the
//! hosted backend lives and tunes a few UI defaults.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! url = "https://example.supabase.co"
//! anon_key = "public-anon-key"
//!
//! [notes]
//! default_folder = "main"
//!
//! [canvas]
//! width = 800
//! height = 400
//!
//! [calendar]
//! upcoming_limit = 5
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`BackendSection`] | Base URL and public anon key of the hosted backend. Both empty by default. |
//! | [`NotesSection`] | Folder new notes land in when the form leaves it blank. |
//! | [`CanvasSection`] | Drawing canvas size, **800×400** by default. |
//! | [`CalendarSection`] | How many tasks the "Tasks To Do" card shows, **5** by default. |
//!
//! Every section derives `Default` so a missing or partial file is equivalent to
//! the defaults for whatever it leaves out.

use serde::{Deserialize, Serialize};

use crate::drawing::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::models::DEFAULT_FOLDER;

/// Top-level configuration stored in `kiddonotes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub notes: NotesSection,
    #[serde(default)]
    pub canvas: CanvasSection,
    #[serde(default)]
    pub calendar: CalendarSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendSection {
    /// Base URL, e.g. `https://project.supabase.co`. No trailing slash needed.
    #[serde(default)]
    pub url: String,
    /// Public (anon) API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotesSection {
    #[serde(default = "default_folder")]
    pub default_folder: String,
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

impl Default for NotesSection {
    fn default() -> Self {
        Self {
            default_folder: default_folder(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSection {
    #[serde(default = "default_canvas_width")]
    pub width: u32,
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

fn default_canvas_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_canvas_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarSection {
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

fn default_upcoming_limit() -> usize {
    5
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given backend.
    pub fn new(url: String, anon_key: String) -> Self {
        Self {
            backend: BackendSection { url, anon_key },
            ..Self::default()
        }
    }

    /// Builder method to set the canvas size.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas = CanvasSection { width, height };
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "kiddonotes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 400);
        assert_eq!(config.calendar.upcoming_limit, 5);
        assert_eq!(config.notes.default_folder, "main");
        assert!(config.backend.url.is_empty());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [backend]
            url = "https://kiddo.example.co"

            [canvas]
            height = 300
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.url, "https://kiddo.example.co");
        assert_eq!(config.backend.anon_key, "");
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 300);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::new("https://x.example".into(), "anon".into()).with_canvas(640, 480);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(AppConfig::from_toml("[canvas]\nwidth = \"wide\"").is_err());
    }
}
