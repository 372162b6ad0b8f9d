//! Parser for raw lyric text.
//!
//! Lyric text is plain text where blank lines separate paragraphs and a
//! paragraph that starts with [`REFRAIN_MARKER`] is the refrain. Parsing
//! never fails; text without blank lines is a single verse.
//!
//! The steps, in order:
//!
//! 1. every run of carriage returns, optionally followed by one newline,
//!    becomes a single newline;
//! 2. spaces and tabs are trimmed from both ends of every line;
//! 3. runs of two or more newlines separate paragraphs;
//! 4. a leading [`REFRAIN_MARKER`] is stripped, with the whitespace after it,
//!    and tags the paragraph as a refrain;
//! 5. the acute accent `´` is replaced by a plain apostrophe.

use songbook_core::lyrics::{Lyrics, Paragraph, ParagraphKind};

/// Marker that opens a refrain paragraph.
pub const REFRAIN_MARKER: &str = "[Omk]";

/// Typographic apostrophe that is replaced by `'`.
const ACUTE_ACCENT: char = '\u{b4}';

fn is_horizontal_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Replace every `\r+\n?` with a single `\n`.
fn normalize_line_endings(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\r' {
            normalized.push(ch);
            continue;
        }
        while chars.next_if_eq(&'\r').is_some() {}
        chars.next_if_eq(&'\n');
        normalized.push('\n');
    }

    normalized
}

/// Split trimmed lines into paragraphs separated by blank lines.
fn split_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for line in text.split('\n').map(|line| line.trim_matches(is_horizontal_whitespace)) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

fn parse_paragraph(lines: &[&str]) -> Paragraph {
    let text = lines.join("\n");
    let (kind, body) = match text.strip_prefix(REFRAIN_MARKER) {
        Some(rest) => (ParagraphKind::Refrain, rest.trim_start()),
        None => (ParagraphKind::Verse, text.as_str()),
    };

    let body = body.replace(ACUTE_ACCENT, "'");
    let lines = if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').map(str::to_string).collect()
    };

    Paragraph::new(kind, lines)
}

/// Parse raw lyric text into tagged paragraphs.
///
/// Whitespace-only text yields no paragraphs.
///
/// # Example
///
/// ```
/// # use songbook_parser::parse_lyrics;
/// # use songbook_core::lyrics::ParagraphKind;
/// let lyrics = parse_lyrics("Amazing grace\r\nhow sweet\r\n\r\n[Omk]\nLa la");
///
/// assert_eq!(lyrics.paragraphs().len(), 2);
/// assert_eq!(lyrics.paragraphs()[0].kind(), ParagraphKind::Verse);
/// assert_eq!(lyrics.paragraphs()[1].kind(), ParagraphKind::Refrain);
/// assert_eq!(lyrics.paragraphs()[1].lines(), &["La la"]);
/// ```
pub fn parse_lyrics(text: &str) -> Lyrics {
    let normalized = normalize_line_endings(text);
    let paragraphs = split_paragraphs(&normalized)
        .iter()
        .map(|lines| parse_paragraph(lines))
        .collect();
    Lyrics::new(paragraphs)
}
