//! Songbook Core Types and Definitions
//!
//! This crate provides the foundational types shared by the songbook parser
//! and renderer. It includes:
//!
//! - **Position keys**: Hierarchical row/column coordinates ([`position::PositionKey`])
//! - **Catalog**: Songs and their identifiers ([`catalog`] module)
//! - **Entries**: Placement of a song on a booklet page ([`entry::Entry`])
//! - **Lyrics**: Paragraph-level lyric structure ([`lyrics`] module)
//! - **Booklet**: Front matter, catalog and sorted entries ([`booklet`] module)

pub mod booklet;
pub mod catalog;
pub mod entry;
pub mod lyrics;
pub mod position;
