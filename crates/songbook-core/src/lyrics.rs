//! Paragraph-level lyric structure.
//!
//! Raw lyric text is parsed into [`Lyrics`]: an ordered list of
//! [`Paragraph`]s, each tagged as a verse or a refrain and holding its
//! lines with surrounding whitespace already removed.

use std::fmt;

/// Tag of a lyric paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParagraphKind {
    /// Default tag for every paragraph.
    #[default]
    Verse,
    /// A paragraph explicitly marked as the refrain.
    Refrain,
}

impl ParagraphKind {
    /// Returns the environment name used for this tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verse => "verse",
            Self::Refrain => "refrain",
        }
    }
}

impl fmt::Display for ParagraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One tagged paragraph of lyrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    kind: ParagraphKind,
    lines: Vec<String>,
}

impl Paragraph {
    pub fn new(kind: ParagraphKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn kind(&self) -> ParagraphKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// The paragraphs of one song, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lyrics {
    paragraphs: Vec<Paragraph>,
}

impl Lyrics {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
