//! # Songbook Parser
//!
//! Parsers for the three textual inputs of a songbook:
//!
//! - **Manifests** ([`parse`]) - TOML booklet descriptions, validated with
//!   span-carrying [`error::Diagnostic`]s
//! - **Position strings** ([`parse_position`]) - hierarchical row/column keys
//! - **Lyrics** ([`parse_lyrics`]) - raw lyric text split into verse and
//!   refrain paragraphs
//!
//! ## Usage
//!
//! ```
//! # use songbook_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         [[songs]]
//!         key = "grace"
//!         name = "Amazing Grace"
//!         lyrics = "Amazing grace, how sweet the sound"
//!
//!         [[entries]]
//!         song = "grace"
//!         page = 1
//!         position = "1"
//!     "#;
//!
//!     let booklet = parse(source)?;
//!     assert_eq!(booklet.entries().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lyrics;
mod manifest;
mod position;
mod span;

pub use lyrics::{REFRAIN_MARKER, parse_lyrics};
pub use manifest::parse;
pub use position::parse_position;
pub use span::Span;
