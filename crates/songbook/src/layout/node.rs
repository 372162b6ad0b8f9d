//! The layout tree.

use std::fmt;

use songbook_core::entry::Entry;

/// Direction in which a branch node splits its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Children are stacked top to bottom at full width.
    Rows,
    /// Children sit left to right, each with an equal share of the width.
    Cols,
}

impl Axis {
    /// Returns the split direction used at a flattened key depth.
    ///
    /// Even depths read row components and split into rows; odd depths read
    /// column components and split into columns.
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::Rows } else { Self::Cols }
    }

    /// Wraps `children` in a branch node of this direction.
    ///
    /// A single child is returned unwrapped, so branch nodes always have at
    /// least two children.
    pub fn wrap<'a>(self, mut children: Vec<LayoutNode<'a>>) -> LayoutNode<'a> {
        if children.len() == 1 {
            return children.remove(0);
        }
        match self {
            Self::Rows => LayoutNode::Rows(children),
            Self::Cols => LayoutNode::Cols(children),
        }
    }
}

/// A node of a page's layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode<'a> {
    /// Exactly one entry.
    Leaf(&'a Entry),
    /// Children stacked vertically, each at full width.
    Rows(Vec<LayoutNode<'a>>),
    /// Children side by side, each `1 / len` of the width.
    Cols(Vec<LayoutNode<'a>>),
}

impl<'a> LayoutNode<'a> {
    /// Returns the children of a branch node, or an empty slice for a leaf.
    pub fn children(&self) -> &[LayoutNode<'a>] {
        match self {
            Self::Leaf(_) => &[],
            Self::Rows(children) | Self::Cols(children) => children,
        }
    }

    /// Returns the split direction of a branch node.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Self::Leaf(_) => None,
            Self::Rows(_) => Some(Axis::Rows),
            Self::Cols(_) => Some(Axis::Cols),
        }
    }

    /// Returns the fraction of the page width given to each child of a
    /// `Cols` node.
    pub fn child_width(&self) -> Option<f64> {
        match self {
            Self::Cols(children) if !children.is_empty() => Some(1.0 / children.len() as f64),
            _ => None,
        }
    }

    /// Returns the entries of all leaves, left to right and top to bottom.
    pub fn leaves(&self) -> Vec<&'a Entry> {
        match self {
            Self::Leaf(entry) => vec![*entry],
            Self::Rows(children) | Self::Cols(children) => {
                children.iter().flat_map(LayoutNode::leaves).collect()
            }
        }
    }
}

/// Compact structural form, e.g. `rows(#0, cols(#1, #2))`, where `#n` is
/// the song id of a leaf.
impl fmt::Display for LayoutNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, children) = match self {
            Self::Leaf(entry) => return write!(f, "{}", entry.song()),
            Self::Rows(children) => ("rows", children),
            Self::Cols(children) => ("cols", children),
        };
        write!(f, "{name}(")?;
        for (index, child) in children.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{child}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use songbook_core::{catalog::SongId, position::PositionKey};

    use super::*;

    fn entries(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|index| Entry::new(SongId::new(index), 1, PositionKey::default()))
            .collect()
    }

    #[test]
    fn test_axis_alternates_by_depth() {
        assert_eq!(Axis::for_depth(0), Axis::Rows);
        assert_eq!(Axis::for_depth(1), Axis::Cols);
        assert_eq!(Axis::for_depth(2), Axis::Rows);
        assert_eq!(Axis::for_depth(7), Axis::Cols);
    }

    #[test]
    fn test_wrap_single_child_is_not_wrapped() {
        let entries = entries(1);
        let node = Axis::Cols.wrap(vec![LayoutNode::Leaf(&entries[0])]);
        assert_eq!(node, LayoutNode::Leaf(&entries[0]));
    }

    #[test]
    fn test_wrap_several_children() {
        let entries = entries(2);
        let node = Axis::Cols.wrap(entries.iter().map(LayoutNode::Leaf).collect());
        assert_eq!(node.axis(), Some(Axis::Cols));
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_child_width() {
        let entries = entries(3);
        let cols = LayoutNode::Cols(entries.iter().map(LayoutNode::Leaf).collect());
        let rows = LayoutNode::Rows(entries.iter().map(LayoutNode::Leaf).collect());

        assert_eq!(cols.child_width(), Some(1.0 / 3.0));
        assert_eq!(rows.child_width(), None);
        assert_eq!(LayoutNode::Leaf(&entries[0]).child_width(), None);
    }

    #[test]
    fn test_display_and_leaves() {
        let entries = entries(3);
        let node = LayoutNode::Rows(vec![
            LayoutNode::Leaf(&entries[0]),
            LayoutNode::Cols(vec![
                LayoutNode::Leaf(&entries[1]),
                LayoutNode::Leaf(&entries[2]),
            ]),
        ]);

        assert_eq!(node.to_string(), "rows(#0, cols(#1, #2))");
        let songs: Vec<_> = node.leaves().iter().map(|e| e.song().index()).collect();
        assert_eq!(songs, vec![0, 1, 2]);
    }
}
