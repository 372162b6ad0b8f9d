//! Booklet manifests.
//!
//! A manifest is a TOML document describing the songs of a booklet and
//! where each one is placed:
//!
//! ```toml
//! [front]
//! text = "Sangbog"
//! image = "cover.png"
//! contents = true
//!
//! [[songs]]
//! key = "grace"
//! name = "Amazing Grace"
//! attribution = "John Newton"
//! lyrics = """
//! Amazing grace, how sweet the sound
//! """
//!
//! [[entries]]
//! song = "grace"
//! page = 1
//! position = "1.2"
//! twocolumn = false
//! attribution = true
//! ```
//!
//! Parsing runs in three phases:
//!
//! 1. **Deserialize** - TOML into raw tables (`E001` on failure)
//! 2. **Validate** - song keys and references (`E2xx`), collected
//! 3. **Elaborate** - build the [`Catalog`] and sort the entries by
//!    `(page, position, song)`

use indexmap::{IndexMap, map::Entry as MapEntry};
use log::{debug, trace};
use serde::Deserialize;
use toml::Spanned;

use songbook_core::{
    booklet::{Booklet, FrontMatter},
    catalog::{Catalog, Song, SongId},
    entry::Entry,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    position::parse_position,
    span::Span,
};

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    front: Option<RawFront>,
    #[serde(default)]
    songs: Vec<RawSong>,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFront {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default = "default_true")]
    contents: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSong {
    key: Spanned<String>,
    name: String,
    #[serde(default)]
    attribution: String,
    #[serde(default)]
    lyrics: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    song: Spanned<String>,
    page: i32,
    #[serde(default)]
    position: Option<Spanned<String>>,
    #[serde(default)]
    twocolumn: bool,
    #[serde(default = "default_true")]
    attribution: bool,
}

fn span_of<T>(spanned: &Spanned<T>) -> Span {
    Span::new(spanned.span())
}

fn deserialize(source: &str) -> Result<RawManifest, ParseError> {
    toml::from_str(source).map_err(|err| {
        let span = err.span().map(Span::new).unwrap_or_default();
        Diagnostic::error(err.message().to_string())
            .with_code(ErrorCode::E001)
            .with_label(span, "invalid manifest")
            .into()
    })
}

/// Check song keys and assign song ids in definition order.
fn collect_songs(
    songs: &[RawSong],
    collector: &mut DiagnosticCollector,
) -> IndexMap<String, (SongId, Span)> {
    let mut keys: IndexMap<String, (SongId, Span)> = IndexMap::new();

    for (index, song) in songs.iter().enumerate() {
        let key = song.key.get_ref();
        let span = span_of(&song.key);

        if key.trim().is_empty() {
            collector.emit(
                Diagnostic::error(format!("song `{}` has an empty key", song.name))
                    .with_code(ErrorCode::E202)
                    .with_label(span, "empty key")
                    .with_help("give the song a short unique key, e.g. its slug"),
            );
            continue;
        }

        match keys.entry(key.clone()) {
            MapEntry::Occupied(first) => {
                let (_, first_span) = *first.get();
                collector.emit(
                    Diagnostic::error(format!("song key `{key}` is defined multiple times"))
                        .with_code(ErrorCode::E201)
                        .with_label(span, "duplicate definition")
                        .with_secondary_label(first_span, "first defined here")
                        .with_help("give each song a unique key"),
                );
            }
            MapEntry::Vacant(slot) => {
                slot.insert((SongId::new(index), span));
            }
        }
    }

    keys
}

/// Resolve entry song references and parse their positions.
fn collect_entries(
    raw_entries: &[RawEntry],
    keys: &IndexMap<String, (SongId, Span)>,
    collector: &mut DiagnosticCollector,
) -> Vec<(Entry, Span)> {
    raw_entries
        .iter()
        .filter_map(|raw| {
            let key = raw.song.get_ref();
            let Some(&(song, _)) = keys.get(key) else {
                collector.emit(
                    Diagnostic::error(format!("unknown song `{key}`"))
                        .with_code(ErrorCode::E200)
                        .with_label(span_of(&raw.song), "not defined in [[songs]]")
                        .with_help("add a [[songs]] table with this key or fix the spelling"),
                );
                return None;
            };

            let (position, span) = match &raw.position {
                Some(position) => (parse_position(position.get_ref()), span_of(position)),
                None => (parse_position(""), span_of(&raw.song)),
            };
            let entry = Entry::new(song, raw.page, position)
                .with_twocolumn(raw.twocolumn)
                .with_attribution(raw.attribution);
            Some((entry, span))
        })
        .collect()
}

/// Warn about entries that share a page and a full position key.
fn check_duplicate_positions(entries: &[(Entry, Span)], collector: &mut DiagnosticCollector) {
    for pair in entries.windows(2) {
        let (first, first_span) = &pair[0];
        let (second, second_span) = &pair[1];
        if first.page() == second.page() && first.position() == second.position() {
            collector.emit(
                Diagnostic::warning(format!(
                    "two entries share position `{}` on page {}",
                    second.position(),
                    second.page()
                ))
                .with_code(ErrorCode::W100)
                .with_label(*second_span, "same position")
                .with_secondary_label(*first_span, "also used here"),
            );
        }
    }
}

/// Parse a booklet manifest into a [`Booklet`].
///
/// Entries of the returned booklet are sorted by `(page, position, song)`,
/// where positions compare on their padded keys and songs compare by
/// definition order.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic found, if the manifest
/// is malformed or refers to songs that do not exist.
pub fn parse(source: &str) -> Result<Booklet, ParseError> {
    let raw = deserialize(source)?;
    debug!(songs = raw.songs.len(), entries = raw.entries.len(); "Manifest deserialized");

    let mut collector = DiagnosticCollector::new();
    let keys = collect_songs(&raw.songs, &mut collector);
    let mut entries = collect_entries(&raw.entries, &keys, &mut collector);

    entries.sort_by(|(a, _), (b, _)| a.sort_key().cmp(&b.sort_key()));
    check_duplicate_positions(&entries, &mut collector);
    collector.finish()?;

    let mut catalog = Catalog::new();
    for song in raw.songs {
        let id = catalog.add(Song::new(song.name, song.attribution, song.lyrics));
        trace!(id:% = id; "Song added to catalog");
    }

    let front = raw
        .front
        .map(|front| FrontMatter::new(front.text, front.image, front.contents))
        .unwrap_or_default();

    let entries = entries.into_iter().map(|(entry, _)| entry).collect();
    Ok(Booklet::new(front, catalog, entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [front]
        text = "Sangbog"

        [[songs]]
        key = "grace"
        name = "Amazing Grace"
        attribution = "John Newton"
        lyrics = "Amazing grace"

        [[songs]]
        key = "abide"
        name = "Abide with Me"
        lyrics = "Abide with me"

        [[entries]]
        song = "grace"
        page = 2
        position = "1"

        [[entries]]
        song = "abide"
        page = 1
        position = "2"
        twocolumn = true

        [[entries]]
        song = "grace"
        page = 1
        position = "1.2"
        attribution = false
    "#;

    fn codes(err: &ParseError) -> Vec<ErrorCode> {
        err.diagnostics()
            .iter()
            .filter_map(|diag| diag.code())
            .collect()
    }

    #[test]
    fn test_parse_full_manifest() {
        let booklet = parse(MANIFEST).expect("manifest should parse");

        assert_eq!(booklet.front().text(), Some("Sangbog"));
        assert!(booklet.front().show_contents());
        assert_eq!(booklet.catalog().len(), 2);
        assert_eq!(booklet.entries().len(), 3);
        assert_eq!(booklet.first_unsorted(), None);
    }

    #[test]
    fn test_entries_are_sorted_by_page_then_position() {
        let booklet = parse(MANIFEST).expect("manifest should parse");
        let placed: Vec<_> = booklet
            .entries()
            .iter()
            .map(|entry| (entry.page(), entry.position().to_string(), entry.song().index()))
            .collect();

        assert_eq!(
            placed,
            vec![
                (1, "1.2".to_string(), 0),
                (1, "2.1".to_string(), 1),
                (2, "1.1".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_entry_flags() {
        let booklet = parse(MANIFEST).expect("manifest should parse");
        let first = &booklet.entries()[0];
        let second = &booklet.entries()[1];

        assert!(!first.show_attribution());
        assert!(!first.twocolumn());
        assert!(second.show_attribution());
        assert!(second.twocolumn());
    }

    #[test]
    fn test_ties_break_on_song_definition_order() {
        let source = r#"
            [[songs]]
            key = "a"
            name = "A"
            [[songs]]
            key = "b"
            name = "B"

            [[entries]]
            song = "b"
            page = 1
            [[entries]]
            song = "a"
            page = 1
        "#;

        let booklet = parse(source).expect("duplicate positions only warn");
        let songs: Vec<_> = booklet.entries().iter().map(|e| e.song().index()).collect();
        assert_eq!(songs, vec![0, 1]);
    }

    #[test]
    fn test_empty_manifest() {
        let booklet = parse("").expect("empty manifest is valid");
        assert!(booklet.entries().is_empty());
        assert!(booklet.front().show_contents());
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse("[[songs]\nkey = ").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E001]);
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse("[[entries]]\nsong = \"x\"\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E001]);
        assert!(err.diagnostics()[0].message().contains("page"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse("[front]\ntitle = \"x\"\n").unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E001]);
    }

    #[test]
    fn test_unknown_song_reference() {
        let source = "[[entries]]\nsong = \"ghost\"\npage = 1\n";
        let err = parse(source).unwrap_err();

        assert_eq!(codes(&err), vec![ErrorCode::E200]);
        let label = &err.diagnostics()[0].labels()[0];
        assert!(source[label.span().start()..label.span().end()].contains("ghost"));
    }

    #[test]
    fn test_duplicate_and_empty_keys_are_all_reported() {
        let source = r#"
            [[songs]]
            key = "a"
            name = "A"
            [[songs]]
            key = "a"
            name = "A again"
            [[songs]]
            key = " "
            name = "Nameless"
        "#;

        let err = parse(source).unwrap_err();
        assert_eq!(codes(&err), vec![ErrorCode::E201, ErrorCode::E202]);
        assert_eq!(err.diagnostics()[0].labels().len(), 2);
    }
}
