//! The booklet model handed from the catalog to the layout engine.
//!
//! A [`Booklet`] bundles [`FrontMatter`], the song [`Catalog`] and the
//! entries placed on its pages. Entries are expected to be sorted by
//! [`Entry::sort_key`]; the booklet records them as given and never
//! re-sorts, so that ordering mistakes upstream stay visible.

use crate::{catalog::Catalog, entry::Entry};

/// Optional material rendered before the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    text: Option<String>,
    image: Option<String>,
    show_contents: bool,
}

impl FrontMatter {
    /// Creates front matter. Empty strings are treated as absent.
    pub fn new(text: Option<String>, image: Option<String>, show_contents: bool) -> Self {
        Self {
            text: text.filter(|text| !text.is_empty()),
            image: image.filter(|image| !image.is_empty()),
            show_contents,
        }
    }

    /// Title text written verbatim at the top of the document.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Reference (path) of the cover image.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Whether a table of contents follows the front matter.
    pub fn show_contents(&self) -> bool {
        self.show_contents
    }

    /// Returns `true` if there is text or an image to print.
    pub fn has_content(&self) -> bool {
        self.text.is_some() || self.image.is_some()
    }
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            text: None,
            image: None,
            show_contents: true,
        }
    }
}

/// A complete booklet ready for layout.
#[derive(Debug, Clone, Default)]
pub struct Booklet {
    front: FrontMatter,
    catalog: Catalog,
    entries: Vec<Entry>,
}

impl Booklet {
    /// Creates a booklet.
    ///
    /// # Arguments
    ///
    /// * `front` - Front matter printed before the first page.
    /// * `catalog` - Songs referenced by the entries.
    /// * `entries` - Entries sorted by `(page, position, song)`.
    pub fn new(front: FrontMatter, catalog: Catalog, entries: Vec<Entry>) -> Self {
        Self {
            front,
            catalog,
            entries,
        }
    }

    pub fn front(&self) -> &FrontMatter {
        &self.front
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the index of the first entry that sorts before its
    /// predecessor, or `None` if the entries are sorted.
    pub fn first_unsorted(&self) -> Option<usize> {
        self.entries
            .windows(2)
            .position(|pair| pair[0].sort_key() > pair[1].sort_key())
            .map(|index| index + 1)
    }

    /// Groups entries into pages.
    ///
    /// Each item is a page number with the maximal run of consecutive
    /// entries on that page.
    pub fn pages(&self) -> impl Iterator<Item = (i32, &[Entry])> {
        self.entries
            .chunk_by(|a, b| a.page() == b.page())
            .map(|entries| (entries[0].page(), entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::SongId, position::PositionKey};

    fn entry(song: usize, page: i32, position: &[u32]) -> Entry {
        Entry::new(
            SongId::new(song),
            page,
            PositionKey::from_components(position.iter().copied()),
        )
    }

    #[test]
    fn test_front_matter_empty_strings_are_absent() {
        let front = FrontMatter::new(Some(String::new()), Some(String::new()), false);
        assert!(!front.has_content());
        assert!(front.text().is_none());
        assert!(front.image().is_none());
    }

    #[test]
    fn test_front_matter_default_shows_contents() {
        let front = FrontMatter::default();
        assert!(front.show_contents());
        assert!(!front.has_content());
    }

    #[test]
    fn test_pages_group_consecutive_entries() {
        let booklet = Booklet::new(
            FrontMatter::default(),
            Catalog::new(),
            vec![
                entry(0, 1, &[1]),
                entry(1, 1, &[2]),
                entry(2, 2, &[1]),
                entry(3, 4, &[]),
            ],
        );

        let pages: Vec<_> = booklet
            .pages()
            .map(|(number, entries)| (number, entries.len()))
            .collect();

        assert_eq!(pages, vec![(1, 2), (2, 1), (4, 1)]);
    }

    #[test]
    fn test_first_unsorted() {
        let sorted = Booklet::new(
            FrontMatter::default(),
            Catalog::new(),
            vec![entry(0, 1, &[1]), entry(1, 1, &[1, 2]), entry(0, 2, &[])],
        );
        assert_eq!(sorted.first_unsorted(), None);

        let unsorted = Booklet::new(
            FrontMatter::default(),
            Catalog::new(),
            vec![entry(0, 1, &[2]), entry(1, 1, &[1])],
        );
        assert_eq!(unsorted.first_unsorted(), Some(1));
    }

    #[test]
    fn test_first_unsorted_breaks_ties_by_song() {
        let booklet = Booklet::new(
            FrontMatter::default(),
            Catalog::new(),
            vec![entry(3, 1, &[1]), entry(2, 1, &[1, 1])],
        );
        assert_eq!(booklet.first_unsorted(), Some(1));
    }
}
