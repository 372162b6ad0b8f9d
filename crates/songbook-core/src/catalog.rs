//! Songs and the catalog that owns them.
//!
//! The [`Catalog`] is the lookup from [`SongId`] to [`Song`] used by the
//! renderer. Layout never owns or mutates songs; it only carries ids.

use std::fmt;

/// Identifier of a song within a [`Catalog`].
///
/// Ids are handed out in insertion order, so comparing ids compares the
/// order in which songs were added. This order breaks ties between entries
/// that share a page and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SongId(usize);

impl SongId {
    /// Creates an id from a raw catalog index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the catalog index of this id.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A song as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    name: String,
    attribution: String,
    lyrics: String,
}

impl Song {
    /// Creates a song.
    ///
    /// # Arguments
    ///
    /// * `name` - Title printed above the song and in the table of contents.
    /// * `attribution` - Author line; may be empty.
    /// * `lyrics` - Raw lyric text, see the parser's lyric format.
    pub fn new(
        name: impl Into<String>,
        attribution: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attribution: attribution.into(),
            lyrics: lyrics.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }
}

/// Ordered collection of songs addressed by [`SongId`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a song and returns its id.
    pub fn add(&mut self, song: Song) -> SongId {
        self.songs.push(song);
        SongId(self.songs.len() - 1)
    }

    /// Looks up a song by id.
    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.songs.get(id.0)
    }

    /// Number of songs in the catalog.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Returns `true` if the catalog holds no songs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Iterates songs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SongId, &Song)> {
        self.songs
            .iter()
            .enumerate()
            .map(|(index, song)| (SongId(index), song))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut catalog = Catalog::new();
        let first = catalog.add(Song::new("A", "", ""));
        let second = catalog.add(Song::new("B", "", ""));

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert!(first < second);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get(SongId::new(3)).is_none());
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut catalog = Catalog::new();
        catalog.add(Song::new("A", "x", "la"));
        catalog.add(Song::new("B", "y", "lo"));

        let names: Vec<_> = catalog.iter().map(|(_, song)| song.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
