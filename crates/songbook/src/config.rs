//! Configuration types for booklet rendering and export.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted,
//! so a configuration file only needs the settings it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and export settings.
//! - [`RenderConfig`] - Controls how song bodies appear in the main document.
//! - [`ExportConfig`] - Controls the file names used for exported songs.
//!
//! # Example
//!
//! ```
//! # use songbook::config::{AppConfig, LyricsMode};
//! let config = AppConfig::default();
//! assert_eq!(config.render().lyrics(), LyricsMode::Inline);
//! assert_eq!(config.export().songs_dir(), "sange");
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, export: ExportConfig) -> Self {
        Self { render, export }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Where the body of each song comes from in the main document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricsMode {
    /// Transcoded lyrics are written into the document.
    #[default]
    Inline,
    /// The document inputs the per-song files produced by export.
    Include,
}

/// Render configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// How song bodies are emitted.
    #[serde(default)]
    lyrics: LyricsMode,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(lyrics: LyricsMode) -> Self {
        Self { lyrics }
    }

    /// Returns the [`LyricsMode`] used for song bodies.
    pub fn lyrics(&self) -> LyricsMode {
        self.lyrics
    }
}

fn default_songs_dir() -> String {
    "sange".to_string()
}

fn default_extension() -> String {
    "tex".to_string()
}

/// Export configuration.
///
/// Exported songs are named `<songs_dir>/<slug>.<extension>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory, relative to the main document, holding song files.
    #[serde(default = "default_songs_dir")]
    songs_dir: String,

    /// File extension of song files, without the dot.
    #[serde(default = "default_extension")]
    extension: String,
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`].
    pub fn new(songs_dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            songs_dir: songs_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn songs_dir(&self) -> &str {
        &self.songs_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            songs_dir: default_songs_dir(),
            extension: default_extension(),
        }
    }
}
