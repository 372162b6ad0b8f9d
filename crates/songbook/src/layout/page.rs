//! Splitting a booklet into laid-out pages.

use log::{debug, info};

use songbook_core::booklet::Booklet;

use super::{engine, node::LayoutNode};
use crate::error::SongbookError;

/// One numbered page and the root of its layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    number: i32,
    root: LayoutNode<'a>,
}

impl<'a> Page<'a> {
    pub fn new(number: i32, root: LayoutNode<'a>) -> Self {
        Self { number, root }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn root(&self) -> &LayoutNode<'a> {
        &self.root
    }
}

/// Lays out every page of a booklet.
///
/// Pages are formed from maximal runs of entries with the same page number
/// and are returned in entry order.
///
/// # Errors
///
/// Returns `SongbookError::Layout` if the booklet's entries are not sorted
/// by `(page, position, song)`. The entries are never re-sorted here.
pub fn paginate(booklet: &Booklet) -> Result<Vec<Page<'_>>, SongbookError> {
    if let Some(index) = booklet.first_unsorted() {
        let entry = &booklet.entries()[index];
        return Err(SongbookError::Layout(format!(
            "entry {index} ({} on page {} at position `{}`) sorts before the entry preceding it",
            entry.song(),
            entry.page(),
            entry.position(),
        )));
    }

    let pages = booklet
        .pages()
        .map(|(number, entries)| {
            let root = engine::layout(entries)?;
            debug!(page = number, entries = entries.len(), layout:% = root; "Laid out page");
            Ok(Page::new(number, root))
        })
        .collect::<Result<Vec<_>, SongbookError>>()?;

    info!(pages = pages.len(), entries = booklet.entries().len(); "Booklet laid out");
    Ok(pages)
}
