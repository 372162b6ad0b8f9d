//! Per-song output files.
//!
//! A booklet can be exported as a main document plus one file per song. The
//! main document then pulls each song in with `\input`. File names are
//! derived from song names and made unique in the order songs are first
//! placed in the booklet:
//!
//! ```text
//! Amazing Grace  ->  sange/amazing-grace.tex
//! Amazing Grace  ->  sange/amazing-grace-1.tex
//! ```

use std::{collections::HashSet, fs, path::Path};

use deunicode::deunicode;
use indexmap::IndexMap;
use log::{debug, info};

use songbook_core::{booklet::Booklet, catalog::SongId};

use super::{Error, tex::transcode};
use crate::config::ExportConfig;

/// Slug used when a song name has no usable characters.
const FALLBACK_SLUG: &str = "song";

/// Converts a song name into a lower-case ASCII slug.
///
/// Non-ASCII text is transliterated. Characters other than ASCII letters,
/// digits, `_`, `-` and whitespace are dropped, runs of `-` and whitespace
/// become a single `-`, and leading or trailing `-` and `_` are removed.
///
/// # Example
///
/// ```
/// # use songbook::export::files::slugify;
/// assert_eq!(slugify("Æblegrød på Ærø!"), "aeblegrod-pa-aero");
/// ```
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name).to_ascii_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_ascii_whitespace() {
            pending_dash = true;
        }
    }

    slug.trim_matches(|ch| ch == '-' || ch == '_').to_string()
}

/// Returns the name the front image is exported under.
///
/// This is the last component of `image`, split on both `/` and `\` so
/// that manifests written on any platform give the same name.
///
/// # Errors
///
/// Returns [`Error::Render`] if `image` ends in a separator or is empty.
pub fn image_file_name(image: &str) -> Result<&str, Error> {
    image
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::Render(format!("front image `{image}` has no file name")))
}

/// Unique output file names for the songs of a booklet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFiles {
    names: IndexMap<SongId, String>,
}

impl SongFiles {
    /// Assigns a file name to every song placed in the booklet.
    ///
    /// Songs are visited in entry order and only their first placement
    /// counts. A name that is already taken gets the suffix `-1`, `-2` and
    /// so on until it is unique.
    pub fn assign(booklet: &Booklet, config: &ExportConfig) -> Self {
        let mut names = IndexMap::new();
        let mut taken = HashSet::new();

        for entry in booklet.entries() {
            let song_id = entry.song();
            if names.contains_key(&song_id) {
                continue;
            }

            let slug = booklet
                .catalog()
                .get(song_id)
                .map(|song| slugify(song.name()))
                .filter(|slug| !slug.is_empty())
                .unwrap_or_else(|| FALLBACK_SLUG.to_string());
            let base = format!("{}/{slug}", config.songs_dir());

            let mut name = format!("{base}.{}", config.extension());
            let mut suffix = 0;
            while taken.contains(&name) {
                suffix += 1;
                name = format!("{base}-{suffix}.{}", config.extension());
            }

            debug!(song:% = song_id, file_name = name; "Assigned song file");
            taken.insert(name.clone());
            names.insert(song_id, name);
        }

        Self { names }
    }

    /// Returns the file name assigned to `song`.
    pub fn get(&self, song: SongId) -> Option<&str> {
        self.names.get(&song).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over songs and their file names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (SongId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

/// A named file produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    name: String,
    content: Vec<u8>,
}

impl ExportFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Relative path of the file inside the export directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Collects the song files and the front image of a booklet.
///
/// Song files hold the transcoded lyrics and are ordered by song id. The
/// front image, if any, follows under its base name; it is read from
/// `assets`, the directory that image paths are relative to.
///
/// # Errors
///
/// Returns [`Error::Render`] if a named song is missing from the catalog and
/// [`Error::Io`] if the front image cannot be read.
pub fn collect_files(
    booklet: &Booklet,
    files: &SongFiles,
    assets: &Path,
) -> Result<Vec<ExportFile>, Error> {
    let mut songs: Vec<(SongId, &str)> = files.iter().collect();
    songs.sort_by_key(|(id, _)| *id);

    let mut exported = songs
        .into_iter()
        .map(|(id, name)| {
            let song = booklet
                .catalog()
                .get(id)
                .ok_or_else(|| Error::Render(format!("song {id} is not in the catalog")))?;
            Ok(ExportFile::new(name, transcode(song.lyrics())))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if let Some(image) = booklet.front().image() {
        let path = assets.join(image);
        let name = image_file_name(image)?;
        let content = fs::read(&path)?;
        debug!(path:? = path, file_name = name; "Read front image");
        exported.push(ExportFile::new(name, content));
    }

    info!(files = exported.len(); "Collected export files");
    Ok(exported)
}
