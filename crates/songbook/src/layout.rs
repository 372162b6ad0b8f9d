//! Layout engine for booklet pages.
//!
//! This module turns the sorted entries of a booklet into one layout tree
//! per page. A tree is built from three kinds of [`LayoutNode`]: a leaf
//! holding one entry, a stack of rows, and a proportional split into
//! columns.
//!
//! # Pipeline Position
//!
//! ```text
//! Manifest
//!     ↓ parse
//! Booklet (sorted entries)
//!     ↓ layout (this module)
//! Pages (LayoutNode trees)
//!     ↓ export
//! Output
//! ```
//!
//! # Submodules
//!
//! - [`node`] - The layout tree and its split direction
//! - `engine` - The alternating recursive partition
//! - `page` - Grouping entries into pages and checking their order

pub mod node;

mod engine;
mod page;

pub use engine::{layout, layout_at_depth};
pub use node::{Axis, LayoutNode};
pub use page::{Page, paginate};
