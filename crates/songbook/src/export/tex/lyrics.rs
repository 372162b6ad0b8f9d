//! Lyric transcoding into verse and refrain environments.
//!
//! Each paragraph becomes one line of output:
//!
//! ```text
//! \begin{verse}first line\\second line\end{verse}
//! \begin{refrain}la la\\la la\end{refrain}
//! ```
//!
//! Lyric text is otherwise copied verbatim, so authors may embed LaTeX.

use std::fmt::{self, Write};

use songbook_core::lyrics::{Lyrics, Paragraph};
use songbook_parser::parse_lyrics;

/// Token that separates the lines of one paragraph.
pub const LINE_SEPARATOR: &str = r"\\";

/// Transcodes raw lyric text into tagged paragraph blocks.
///
/// Never fails. Text without paragraphs, such as an empty or
/// whitespace-only string, transcodes to the empty string.
///
/// # Example
///
/// ```
/// # use songbook::export::tex::transcode;
/// assert_eq!(
///     transcode("[Omk]\nLa la\nLa la"),
///     r"\begin{refrain}La la\\La la\end{refrain}",
/// );
/// ```
pub fn transcode(text: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_lyrics(&mut out, &parse_lyrics(text));
    out
}

/// Writes parsed lyrics, one paragraph block per line.
///
/// No newline follows the last block.
pub fn write_lyrics<W: Write>(out: &mut W, lyrics: &Lyrics) -> fmt::Result {
    for (index, paragraph) in lyrics.paragraphs().iter().enumerate() {
        if index > 0 {
            out.write_char('\n')?;
        }
        write_paragraph(out, paragraph)?;
    }
    Ok(())
}

fn write_paragraph<W: Write>(out: &mut W, paragraph: &Paragraph) -> fmt::Result {
    let kind = paragraph.kind();
    write!(out, "\\begin{{{kind}}}")?;
    for (index, line) in paragraph.lines().iter().enumerate() {
        if index > 0 {
            out.write_str(LINE_SEPARATOR)?;
        }
        out.write_str(line)?;
    }
    write!(out, "\\end{{{kind}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refrain_marker() {
        assert_eq!(
            transcode("[Omk]\nLa la\nLa la"),
            r"\begin{refrain}La la\\La la\end{refrain}"
        );
    }

    #[test]
    fn test_plain_paragraph_is_verse() {
        assert_eq!(
            transcode("La la\nLa la"),
            r"\begin{verse}La la\\La la\end{verse}"
        );
    }

    #[test]
    fn test_paragraphs_one_per_line() {
        let text = "Amazing grace\r\nhow sweet\r\n\r\n[Omk]  I once\nwas lost\n\n\n\nbut now";
        assert_eq!(
            transcode(text),
            concat!(
                r"\begin{verse}Amazing grace\\how sweet\end{verse}",
                "\n",
                r"\begin{refrain}I once\\was lost\end{refrain}",
                "\n",
                r"\begin{verse}but now\end{verse}",
            )
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(transcode(""), "");
        assert_eq!(transcode(" \t\r\n\n  \n"), "");
    }

    #[test]
    fn test_acute_accent_and_markup_pass_through() {
        assert_eq!(
            transcode("don\u{b4}t \\textit{stop}"),
            r"\begin{verse}don't \textit{stop}\end{verse}"
        );
    }

    #[test]
    fn test_marker_only_refrain() {
        assert_eq!(transcode("[Omk]"), r"\begin{refrain}\end{refrain}");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Splitting a single verse block by the separator restores its lines.
    fn check_line_round_trip(lines: &[String]) -> Result<(), TestCaseError> {
        let output = transcode(&lines.join("\n"));

        let body = output
            .strip_prefix(r"\begin{verse}")
            .and_then(|rest| rest.strip_suffix(r"\end{verse}"));
        prop_assert!(body.is_some(), "not a single verse block: {output:?}");

        let split: Vec<&str> = body.unwrap_or_default().split(LINE_SEPARATOR).collect();
        prop_assert_eq!(split, lines.iter().map(String::as_str).collect::<Vec<_>>());
        Ok(())
    }

    proptest! {
        #[test]
        fn line_round_trip(lines in prop::collection::vec("[a-zA-Z,.!?][a-zA-Z ,.!?]{0,20}[a-zA-Z,.!?]", 1..8)) {
            check_line_round_trip(&lines)?;
        }
    }
}
