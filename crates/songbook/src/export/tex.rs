//! LaTeX output.
//!
//! [`Tex`] walks the layout tree of every page and writes a LaTeX body meant
//! to be `\input` by a document that defines the `song`, `verse` and
//! `refrain` environments and loads `multicol` and `graphicx`.
//!
//! | Layout node | Output |
//! |-------------|--------|
//! | `Leaf` | `\begin{song}{name}{attribution}` ... `\end{song}` |
//! | `Rows` | children in order, no wrapper |
//! | `Cols` | each child in `\begin{minipage}[t]{w\textwidth}` ... `\end{minipage}%` |
//!
//! Every page ends with `\clearpage`.

mod lyrics;

pub use lyrics::{LINE_SEPARATOR, transcode, write_lyrics};

use std::fmt::Write;

use log::{debug, info, trace};

use songbook_core::{booklet::Booklet, entry::Entry};

use super::{
    Error, Exporter,
    files::{SongFiles, image_file_name},
};
use crate::{
    config::LyricsMode,
    layout::{LayoutNode, Page},
};

/// Where a song's lyrics come from in the output.
#[derive(Debug, Clone, Copy)]
enum Body<'a> {
    /// Transcoded lyrics are written in place.
    Inline,
    /// Each song `\input`s its exported file.
    Include(&'a SongFiles),
}

/// Builder for [`Tex`] exporters.
///
/// # Example
///
/// ```
/// # use songbook::{config::LyricsMode, export::{Exporter, tex::TexBuilder}, layout};
/// # use songbook_core::booklet::Booklet;
/// let booklet = Booklet::default();
/// let pages = layout::paginate(&booklet).expect("layout");
///
/// let mut tex = TexBuilder::new(&booklet)
///     .with_lyrics(LyricsMode::Inline)
///     .build()
///     .expect("build");
/// tex.export_pages(&pages).expect("export");
/// assert_eq!(tex.into_string(), "\\tableofcontents\\clearpage\n");
/// ```
#[derive(Debug)]
pub struct TexBuilder<'a> {
    booklet: &'a Booklet,
    lyrics: LyricsMode,
    files: Option<&'a SongFiles>,
}

impl<'a> TexBuilder<'a> {
    pub fn new(booklet: &'a Booklet) -> Self {
        Self {
            booklet,
            lyrics: LyricsMode::default(),
            files: None,
        }
    }

    /// Set how lyrics are placed in the document.
    pub fn with_lyrics(mut self, lyrics: LyricsMode) -> Self {
        self.lyrics = lyrics;
        self
    }

    /// Set the song file names used by [`LyricsMode::Include`].
    pub fn with_files(mut self, files: &'a SongFiles) -> Self {
        self.files = Some(files);
        self
    }

    /// Build the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if include mode is selected without song
    /// file names.
    pub fn build(self) -> Result<Tex<'a>, Error> {
        let body = match (self.lyrics, self.files) {
            (LyricsMode::Inline, _) => Body::Inline,
            (LyricsMode::Include, Some(files)) => Body::Include(files),
            (LyricsMode::Include, None) => {
                return Err(Error::Render(
                    "including lyrics requires song file names".to_string(),
                ));
            }
        };

        Ok(Tex {
            booklet: self.booklet,
            body,
            out: String::new(),
        })
    }
}

/// LaTeX exporter that writes into an in-memory buffer.
#[derive(Debug)]
pub struct Tex<'a> {
    booklet: &'a Booklet,
    body: Body<'a>,
    out: String,
}

impl Tex<'_> {
    /// Returns the document written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the exporter and returns the document.
    pub fn into_string(self) -> String {
        self.out
    }

    fn write_front_matter(&mut self) -> Result<(), Error> {
        let booklet = self.booklet;
        let front = booklet.front();

        if let Some(text) = front.text() {
            writeln!(self.out, "{text}")?;
        }
        if let Some(image) = front.image() {
            let width = if front.text().is_some() { "0.5" } else { "1" };
            let basename = image_file_name(image)?;
            writeln!(
                self.out,
                "\\noindent\\includegraphics[width={width}\\textwidth]{{{basename}}}"
            )?;
        }
        if front.has_content() {
            writeln!(self.out, "\\thispagestyle{{empty}}\\clearpage")?;
        }
        if front.show_contents() {
            writeln!(self.out, "\\tableofcontents\\clearpage")?;
        }
        Ok(())
    }

    fn write_node(&mut self, node: &LayoutNode<'_>) -> Result<(), Error> {
        match node {
            LayoutNode::Leaf(entry) => self.write_song(entry),
            LayoutNode::Rows(children) => {
                for child in children {
                    self.write_node(child)?;
                }
                Ok(())
            }
            LayoutNode::Cols(children) => {
                let width = node.child_width().unwrap_or(1.0);
                for child in children {
                    writeln!(self.out, "\\begin{{minipage}}[t]{{{width}\\textwidth}}")?;
                    self.write_node(child)?;
                    writeln!(self.out, "\\end{{minipage}}%")?;
                }
                Ok(())
            }
        }
    }

    fn write_song(&mut self, entry: &Entry) -> Result<(), Error> {
        let booklet = self.booklet;
        let song = booklet.catalog().get(entry.song()).ok_or_else(|| {
            Error::Render(format!("song {} is not in the catalog", entry.song()))
        })?;
        trace!(song:% = entry.song(), name = song.name(); "Writing song");

        let attribution = if entry.show_attribution() {
            song.attribution()
        } else {
            ""
        };
        writeln!(self.out, "\\begin{{song}}{{{}}}{{{attribution}}}", song.name())?;
        if entry.twocolumn() {
            writeln!(self.out, "\\begin{{multicols}}{{2}}")?;
        }

        match self.body {
            Body::Inline => {
                let start = self.out.len();
                write_lyrics(&mut self.out, &songbook_parser::parse_lyrics(song.lyrics()))?;
                if self.out.len() > start {
                    self.out.push('\n');
                }
            }
            Body::Include(files) => {
                let file = files.get(entry.song()).ok_or_else(|| {
                    Error::Render(format!("song {} has no exported file", entry.song()))
                })?;
                writeln!(self.out, "\\input{{{file}}}")?;
            }
        }

        if entry.twocolumn() {
            writeln!(self.out, "\\end{{multicols}}")?;
        }
        writeln!(self.out, "\\end{{song}}")?;
        Ok(())
    }
}

impl Exporter for Tex<'_> {
    fn export_pages(&mut self, pages: &[Page<'_>]) -> Result<(), Error> {
        self.write_front_matter()?;
        for page in pages {
            debug!(page = page.number(); "Writing page");
            self.write_node(page.root())?;
            writeln!(self.out, "\\clearpage")?;
        }
        info!(pages = pages.len(), bytes = self.out.len(); "LaTeX document written");
        Ok(())
    }
}
