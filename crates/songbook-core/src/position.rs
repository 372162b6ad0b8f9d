//! Hierarchical position keys.
//!
//! A [`PositionKey`] places an entry on its page. It is an ordered sequence
//! of `(row, col)` pairs, one pair per nesting depth. The layout engine reads
//! it as a flattened sequence of scalars where even indices are row
//! components and odd indices are column components.
//!
//! Keys of different depth are compared as if the shorter key was padded
//! with `(1, 1)` pairs, so `1` and `1.1.1.1` describe the same slot.
//!
//! # Example
//!
//! ```
//! # use songbook_core::position::PositionKey;
//! let short = PositionKey::from_components([2]);
//! let long = PositionKey::from_components([2, 1, 1]);
//!
//! assert_eq!(short.pairs(), &[(2, 1)]);
//! assert_eq!(short.component(5), 1);
//! assert_eq!(short, long);
//! ```

use std::{cmp::Ordering, fmt};

/// Value of a component that is missing or could not be read.
pub const DEFAULT_COMPONENT: u32 = 1;

/// An ordered sequence of `(row, col)` pairs, one per nesting depth.
///
/// Equality and ordering are defined on the padded, flattened form: the
/// trailing depths a key does not specify count as [`DEFAULT_COMPONENT`].
#[derive(Debug, Clone, Default)]
pub struct PositionKey {
    pairs: Vec<(u32, u32)>,
}

impl PositionKey {
    /// Creates a key from explicit `(row, col)` pairs.
    pub fn new(pairs: Vec<(u32, u32)>) -> Self {
        Self { pairs }
    }

    /// Creates a key from flattened components.
    ///
    /// Components are consumed in `(row, col)` pairs. An odd trailing
    /// component becomes a row whose column is [`DEFAULT_COMPONENT`].
    pub fn from_components(components: impl IntoIterator<Item = u32>) -> Self {
        let mut components = components.into_iter();
        let mut pairs = Vec::new();
        while let Some(row) = components.next() {
            let col = components.next().unwrap_or(DEFAULT_COMPONENT);
            pairs.push((row, col));
        }
        Self { pairs }
    }

    /// Returns the `(row, col)` pairs exactly as specified.
    pub fn pairs(&self) -> &[(u32, u32)] {
        &self.pairs
    }

    /// Returns the number of specified depths.
    pub fn depth(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the number of specified flattened components.
    pub fn flat_len(&self) -> usize {
        self.pairs.len() * 2
    }

    /// Returns `true` if no depth is specified.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the flattened component at `index`.
    ///
    /// Even indices are rows, odd indices are columns. Indices past the end
    /// of the key yield [`DEFAULT_COMPONENT`].
    pub fn component(&self, index: usize) -> u32 {
        self.pairs
            .get(index / 2)
            .map(|&(row, col)| if index % 2 == 0 { row } else { col })
            .unwrap_or(DEFAULT_COMPONENT)
    }

    /// Returns a copy right-padded with `(1, 1)` pairs up to `depth` pairs.
    ///
    /// Keys already at least `depth` deep are returned unchanged.
    pub fn padded(&self, depth: usize) -> Self {
        let mut pairs = self.pairs.clone();
        if pairs.len() < depth {
            pairs.resize(depth, (DEFAULT_COMPONENT, DEFAULT_COMPONENT));
        }
        Self { pairs }
    }

    /// Pads every key in `keys` to the depth of the deepest one.
    pub fn pad_all(keys: &[Self]) -> Vec<Self> {
        let depth = keys.iter().map(Self::depth).max().unwrap_or(0);
        keys.iter().map(|key| key.padded(depth)).collect()
    }
}

impl PartialEq for PositionKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PositionKey {}

impl PartialOrd for PositionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PositionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.flat_len().max(other.flat_len());
        (0..len)
            .map(|index| self.component(index).cmp(&other.component(index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (row, col)) in self.pairs.iter().enumerate() {
            if index > 0 {
                write!(f, ".")?;
            }
            write!(f, "{row}.{col}")?;
        }
        Ok(())
    }
}
