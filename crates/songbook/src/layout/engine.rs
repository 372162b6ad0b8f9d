//! Alternating recursive partition of sorted entries.
//!
//! Position keys are read as flattened component sequences. At depth `d`
//! the engine looks at component `d` of every key (a row component when
//! `d` is even, a column component when it is odd):
//!
//! - a single entry becomes a leaf;
//! - if every entry has the same component, depth `d` adds no structure
//!   and the engine moves on to `d + 1`;
//! - otherwise the entries are cut into maximal runs of equal components,
//!   each run is laid out at `d + 1`, and the results are wrapped in rows
//!   (even `d`) or columns (odd `d`).
//!
//! Because entries arrive sorted by position, equal components are always
//! adjacent, so runs are found by scanning for changes.

use log::{trace, warn};

use songbook_core::entry::Entry;

use super::node::{Axis, LayoutNode};
use crate::error::SongbookError;

/// Lay out the entries of one page.
///
/// # Arguments
///
/// * `entries` - Entries of one page, sorted by position then song.
///
/// # Errors
///
/// Returns `SongbookError::Layout` if `entries` is empty.
pub fn layout(entries: &[Entry]) -> Result<LayoutNode<'_>, SongbookError> {
    layout_at_depth(entries, 0)
}

/// Lay out entries starting at a given flattened key depth.
///
/// Depths below `depth` are assumed to be shared by all entries.
///
/// # Errors
///
/// Returns `SongbookError::Layout` if `entries` is empty.
pub fn layout_at_depth(entries: &[Entry], depth: usize) -> Result<LayoutNode<'_>, SongbookError> {
    if entries.is_empty() {
        return Err(SongbookError::Layout(
            "cannot lay out an empty list of entries".to_string(),
        ));
    }
    debug_assert!(
        entries
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key()),
        "entries must be sorted by (page, position, song)"
    );

    // Past the longest key every component is the default, so no later
    // depth can tell the remaining entries apart.
    let max_depth = entries
        .iter()
        .map(|entry| entry.position().flat_len())
        .max()
        .unwrap_or(0);

    Ok(partition(entries, depth, max_depth))
}

fn partition(entries: &[Entry], mut depth: usize, max_depth: usize) -> LayoutNode<'_> {
    if let [entry] = entries {
        return LayoutNode::Leaf(entry);
    }

    // Depths without variation are skipped in place, so the call stack only
    // grows with the number of actual splits.
    let runs: Vec<&[Entry]> = loop {
        if depth >= max_depth {
            warn!(
                page = entries[0].page(),
                position:% = entries[0].position(),
                count = entries.len();
                "Entries share a position, stacking them in song order"
            );
            return LayoutNode::Rows(entries.iter().map(LayoutNode::Leaf).collect());
        }

        let runs: Vec<&[Entry]> = entries
            .chunk_by(|a, b| a.position().component(depth) == b.position().component(depth))
            .collect();
        if runs.len() > 1 {
            break runs;
        }
        depth += 1;
    };

    let axis = Axis::for_depth(depth);
    trace!(depth, axis:?, groups = runs.len(); "Splitting entries");

    let children = runs
        .into_iter()
        .map(|run| partition(run, depth + 1, max_depth))
        .collect();
    axis.wrap(children)
}
