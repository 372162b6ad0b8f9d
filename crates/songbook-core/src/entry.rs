//! Booklet entries.
//!
//! An [`Entry`] places one song on one page at a [`PositionKey`]. Entries are
//! read in bulk for a page and consumed once by the layout engine.

use crate::{catalog::SongId, position::PositionKey};

/// A song placed on a booklet page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    song: SongId,
    page: i32,
    position: PositionKey,
    twocolumn: bool,
    show_attribution: bool,
}

impl Entry {
    /// Creates a single-column entry that prints the song's attribution.
    pub fn new(song: SongId, page: i32, position: PositionKey) -> Self {
        Self {
            song,
            page,
            position,
            twocolumn: false,
            show_attribution: true,
        }
    }

    /// Set whether the song's verses are set in two columns (builder style).
    pub fn with_twocolumn(mut self, twocolumn: bool) -> Self {
        self.twocolumn = twocolumn;
        self
    }

    /// Set whether the song's attribution line is printed (builder style).
    pub fn with_attribution(mut self, show_attribution: bool) -> Self {
        self.show_attribution = show_attribution;
        self
    }

    pub fn song(&self) -> SongId {
        self.song
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn position(&self) -> &PositionKey {
        &self.position
    }

    pub fn twocolumn(&self) -> bool {
        self.twocolumn
    }

    pub fn show_attribution(&self) -> bool {
        self.show_attribution
    }

    /// The `(page, position, song)` key entries must be sorted by.
    pub fn sort_key(&self) -> (i32, &PositionKey, SongId) {
        (self.page, &self.position, self.song)
    }
}
