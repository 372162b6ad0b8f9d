//! Songbook - lays out song entries on pages and renders them as LaTeX.
//!
//! Each entry of a booklet places a song on a page at a hierarchical
//! position key. The keys of one page are partitioned into alternating rows
//! and columns, and the resulting tree is written as a LaTeX document with
//! verse and refrain environments.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use songbook_core::{booklet, catalog, entry, lyrics, position};

pub use error::SongbookError;

use std::path::Path;

use log::{debug, info, trace};

use songbook_core::booklet::Booklet;

use config::{AppConfig, LyricsMode};
use export::{
    Exporter,
    files::{self, ExportFile, SongFiles},
    tex::TexBuilder,
};

/// A rendered document together with the files it includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletExport {
    document: String,
    files: Vec<ExportFile>,
}

impl BookletExport {
    /// The main LaTeX document, which `\input`s every song file.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Song files ordered by song id, then the front image if any.
    pub fn files(&self) -> &[ExportFile] {
        &self.files
    }
}

/// Builder for parsing and rendering songbooks.
///
/// This provides an API for processing booklet manifests through parsing,
/// layout, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use songbook::{BookletBuilder, config::AppConfig};
///
/// let source = r#"
///     [front]
///     contents = false
///
///     [[songs]]
///     key = "grace"
///     name = "Amazing Grace"
///     lyrics = "Amazing grace\nhow sweet the sound"
///
///     [[entries]]
///     song = "grace"
///     page = 1
/// "#;
///
/// let builder = BookletBuilder::new(AppConfig::default());
/// let booklet = builder.parse(source).expect("Failed to parse");
/// let tex = builder.render_tex(&booklet).expect("Failed to render");
///
/// assert!(tex.contains(r"\begin{verse}Amazing grace\\how sweet the sound\end{verse}"));
/// ```
#[derive(Default)]
pub struct BookletBuilder {
    config: AppConfig,
}

impl BookletBuilder {
    /// Create a new booklet builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML booklet manifest.
    ///
    /// The entries of the returned booklet are sorted by
    /// `(page, position, song)`.
    ///
    /// # Errors
    ///
    /// Returns `SongbookError::Parse` with every diagnostic found in the
    /// manifest.
    pub fn parse(&self, source: &str) -> Result<Booklet, SongbookError> {
        info!("Parsing booklet manifest");
        let booklet = songbook_parser::parse(source)
            .map_err(|err| SongbookError::new_parse_error(err, source))?;
        debug!(
            songs = booklet.catalog().len(),
            entries = booklet.entries().len();
            "Manifest parsed successfully"
        );
        trace!(booklet:?; "Parsed booklet");
        Ok(booklet)
    }

    /// Render a booklet to a LaTeX document.
    ///
    /// Lyrics are placed according to the `render.lyrics` setting. In
    /// include mode the document refers to the files that
    /// [`export`](Self::export) would write.
    ///
    /// # Errors
    ///
    /// Returns `SongbookError::Layout` if the entries are not sorted and
    /// `SongbookError::Export` if rendering fails.
    pub fn render_tex(&self, booklet: &Booklet) -> Result<String, SongbookError> {
        let files = SongFiles::assign(booklet, self.config.export());
        self.render_with(booklet, self.config.render().lyrics(), &files)
    }

    /// Render a booklet as a main document plus one file per song.
    ///
    /// The main document always includes the song files, regardless of the
    /// `render.lyrics` setting. The front image is read from `assets`.
    ///
    /// # Errors
    ///
    /// Returns `SongbookError::Layout` if the entries are not sorted and
    /// `SongbookError::Export` if rendering fails or the front image cannot
    /// be read.
    pub fn export(&self, booklet: &Booklet, assets: &Path) -> Result<BookletExport, SongbookError> {
        let song_files = SongFiles::assign(booklet, self.config.export());
        info!(songs = song_files.len(); "Exporting booklet");

        let document = self.render_with(booklet, LyricsMode::Include, &song_files)?;
        let files = files::collect_files(booklet, &song_files, assets)?;

        Ok(BookletExport { document, files })
    }

    fn render_with(
        &self,
        booklet: &Booklet,
        lyrics: LyricsMode,
        files: &SongFiles,
    ) -> Result<String, SongbookError> {
        info!(lyrics:?; "Laying out booklet");
        let pages = layout::paginate(booklet)?;

        let mut tex = TexBuilder::new(booklet)
            .with_lyrics(lyrics)
            .with_files(files)
            .build()?;
        tex.export_pages(&pages)?;

        info!("LaTeX rendered successfully");
        Ok(tex.into_string())
    }
}
