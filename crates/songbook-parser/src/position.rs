//! Parser for position strings.
//!
//! A position string is a dot-separated list of components, read in
//! `(row, col)` pairs: `"2"` is row 2, `"2.3"` is row 2 column 3, and
//! `"2.3.1.2"` nests a second `(row, col)` pair inside that cell.
//!
//! Parsing is total. Every component is the run of ASCII digits at its
//! start (after leading blanks); anything after the digits is ignored, and a
//! component without digits, or one too large for `u32`, counts as
//! [`DEFAULT_COMPONENT`]. A blank string is the empty key.

use log::trace;
use winnow::{
    Parser as _,
    ascii::{digit1, space0},
    combinator::{opt, preceded, separated},
    error::{ContextError, ErrMode},
    token::take_till,
};

use songbook_core::position::{DEFAULT_COMPONENT, PositionKey};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

const SEPARATOR: char = '.';

/// Parse one component, skipping whatever follows its digits.
fn component(input: &mut Input<'_>) -> IResult<u32> {
    let value = preceded(space0, opt(digit1.parse_to::<u32>())).parse_next(input)?;
    take_till(0.., SEPARATOR).void().parse_next(input)?;
    Ok(value.unwrap_or(DEFAULT_COMPONENT))
}

/// Parse every component of a non-blank position string.
fn components(input: &mut Input<'_>) -> IResult<Vec<u32>> {
    separated(1.., component, SEPARATOR).parse_next(input)
}

/// Parse a position string into a [`PositionKey`].
///
/// # Examples
///
/// ```
/// # use songbook_parser::parse_position;
/// assert_eq!(parse_position("1.2").pairs(), &[(1, 2)]);
/// assert_eq!(parse_position("3").pairs(), &[(3, 1)]);
/// assert_eq!(parse_position("x.2b").pairs(), &[(1, 2)]);
/// assert!(parse_position("").is_empty());
/// ```
pub fn parse_position(source: &str) -> PositionKey {
    if source.trim().is_empty() {
        return PositionKey::default();
    }

    let mut input = source;
    match components.parse_next(&mut input) {
        Ok(values) => {
            let key = PositionKey::from_components(values);
            trace!(source, key:% = key; "Parsed position");
            key
        }
        Err(_) => {
            trace!(source; "Unreadable position, using default");
            PositionKey::default()
        }
    }
}
