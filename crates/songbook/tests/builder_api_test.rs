//! Integration tests for the BookletBuilder API
//!
//! These tests run manifests through parsing, layout and rendering.

use std::fs;

use songbook::{
    BookletBuilder, SongbookError,
    config::{AppConfig, ExportConfig, LyricsMode, RenderConfig},
    layout::{self, Axis},
};

const THREE_ROWS: &str = r#"
    [front]
    contents = false

    [[songs]]
    key = "one"
    name = "One"
    lyrics = "First"

    [[songs]]
    key = "two"
    name = "Two"
    lyrics = "Second"

    [[songs]]
    key = "three"
    name = "Three"
    lyrics = "Third"

    [[entries]]
    song = "three"
    page = 1
    position = "3"

    [[entries]]
    song = "one"
    page = 1
    position = "1"

    [[entries]]
    song = "two"
    page = 1
    position = "2"
"#;

#[test]
fn test_three_rows_render_in_position_order() {
    let builder = BookletBuilder::default();
    let booklet = builder.parse(THREE_ROWS).expect("Failed to parse manifest");

    let pages = layout::paginate(&booklet).expect("Failed to lay out booklet");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].root().to_string(), "rows(#0, #1, #2)");
    assert_eq!(pages[0].root().axis(), Some(Axis::Rows));

    let tex = builder.render_tex(&booklet).expect("Failed to render");
    let first = tex.find("{One}").expect("One is rendered");
    let second = tex.find("{Two}").expect("Two is rendered");
    let third = tex.find("{Three}").expect("Three is rendered");
    assert!(first < second && second < third);
    assert_eq!(tex.matches(r"\clearpage").count(), 1);
    assert!(tex.ends_with("\\end{song}\n\\clearpage\n"));
    assert!(!tex.contains("minipage"));
}

#[test]
fn test_same_row_splits_into_columns() {
    let source = r#"
        [[songs]]
        key = "left"
        name = "Left"
        lyrics = "[Omk]\nLa la\nLa la"

        [[songs]]
        key = "right"
        name = "Right"
        lyrics = "Do re mi"

        [[entries]]
        song = "right"
        page = 1
        position = "1.2"

        [[entries]]
        song = "left"
        page = 1
        position = "1.1"
    "#;

    let builder = BookletBuilder::default();
    let booklet = builder.parse(source).expect("Failed to parse manifest");

    let pages = layout::paginate(&booklet).expect("Failed to lay out booklet");
    assert_eq!(pages[0].root().to_string(), "cols(#0, #1)");
    assert_eq!(pages[0].root().axis(), Some(Axis::Cols));
    assert_eq!(pages[0].root().child_width(), Some(0.5));

    let tex = builder.render_tex(&booklet).expect("Failed to render");
    assert_eq!(tex.matches(r"\begin{minipage}[t]{0.5\textwidth}").count(), 2);
    assert!(tex.contains(r"\begin{refrain}La la\\La la\end{refrain}"));
    assert!(tex.starts_with("\\tableofcontents\\clearpage\n"));
}

#[test]
fn test_nested_layout_reads_left_to_right() {
    let source = r#"
        [[songs]]
        key = "a"
        name = "A"

        [[songs]]
        key = "b"
        name = "B"

        [[songs]]
        key = "c"
        name = "C"

        [[entries]]
        song = "c"
        page = 1
        position = "1.2"

        [[entries]]
        song = "b"
        page = 1
        position = "1.1.2"

        [[entries]]
        song = "a"
        page = 1
        position = "1.1.1"
    "#;

    let booklet = BookletBuilder::default()
        .parse(source)
        .expect("Failed to parse manifest");
    let pages = layout::paginate(&booklet).expect("Failed to lay out booklet");
    let root = pages[0].root();

    assert_eq!(root.axis(), Some(Axis::Cols));
    assert_eq!(root.children()[0].axis(), Some(Axis::Rows));
    assert_eq!(root.children()[1].axis(), None);

    let songs: Vec<_> = root.leaves().iter().map(|entry| entry.song().index()).collect();
    assert_eq!(songs, vec![0, 1, 2]);
}

#[test]
fn test_deeply_nested_shared_positions() {
    let prefix = "1.".repeat(5_000);
    let source = format!(
        r#"
        [[songs]]
        key = "first"
        name = "First"
        lyrics = "One"

        [[songs]]
        key = "second"
        name = "Second"
        lyrics = "Two"

        [[entries]]
        song = "second"
        page = 1
        position = "{prefix}2"

        [[entries]]
        song = "first"
        page = 1
        position = "{prefix}1"
        "#
    );

    let builder = BookletBuilder::default();
    let booklet = builder.parse(&source).expect("Failed to parse manifest");
    let pages = layout::paginate(&booklet).expect("Failed to lay out booklet");
    assert_eq!(pages[0].root().to_string(), "rows(#0, #1)");

    let tex = builder.render_tex(&booklet).expect("Failed to render");
    assert!(tex.find("{First}") < tex.find("{Second}"));
}

#[test]
fn test_include_mode_from_config() {
    let config = AppConfig::new(
        RenderConfig::new(LyricsMode::Include),
        ExportConfig::new("songs", "tex"),
    );
    let builder = BookletBuilder::new(config);
    let booklet = builder.parse(THREE_ROWS).expect("Failed to parse manifest");

    let tex = builder.render_tex(&booklet).expect("Failed to render");
    assert!(tex.contains(r"\input{songs/one.tex}"));
    assert!(!tex.contains(r"\begin{verse}"));
}

#[test]
fn test_export_writes_song_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("cover.jpg"), b"jpeg").expect("Failed to write image");

    let source = r#"
        [front]
        text = "Sangbog"
        image = "cover.jpg"

        [[songs]]
        key = "a"
        name = "Amazing Grace"
        lyrics = "How sweet"

        [[songs]]
        key = "b"
        name = "Amazing Grace"
        lyrics = "The sound"

        [[entries]]
        song = "b"
        page = 1

        [[entries]]
        song = "a"
        page = 2
    "#;

    let builder = BookletBuilder::default();
    let booklet = builder.parse(source).expect("Failed to parse manifest");
    let export = builder
        .export(&booklet, dir.path())
        .expect("Failed to export");

    let names: Vec<_> = export.files().iter().map(|file| file.name()).collect();
    assert_eq!(
        names,
        vec![
            "sange/amazing-grace-1.tex",
            "sange/amazing-grace.tex",
            "cover.jpg",
        ]
    );
    assert_eq!(export.files()[1].content(), br"\begin{verse}The sound\end{verse}");
    assert!(export.document().contains(r"\input{sange/amazing-grace.tex}"));
    assert!(export.document().starts_with("Sangbog\n"));
}

#[test]
fn test_parse_error_keeps_source() {
    let source = r#"
        [[entries]]
        song = "missing"
        page = 1
    "#;

    let builder = BookletBuilder::default();
    match builder.parse(source) {
        Err(SongbookError::Parse { err, src }) => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}
