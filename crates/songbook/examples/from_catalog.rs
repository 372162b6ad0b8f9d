//! Example: Creating a booklet from the catalog types
//!
//! This example demonstrates how to build a booklet programmatically,
//! without parsing a manifest, and render it to LaTeX.

use songbook::{
    BookletBuilder,
    booklet::{Booklet, FrontMatter},
    catalog::{Catalog, Song},
    entry::Entry,
    layout,
    position::PositionKey,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building booklet from catalog types...\n");

    let mut catalog = Catalog::new();
    let grace = catalog.add(Song::new(
        "Amazing Grace",
        "John Newton",
        "Amazing grace, how sweet the sound\nThat saved a wretch like me\n\n\
         [Omk]\nI once was lost, but now am found\nWas blind, but now I see",
    ));
    let shanty = catalog.add(Song::new(
        "Drunken Sailor",
        "Traditional",
        "What shall we do with a drunken sailor\nEarly in the morning",
    ));
    let lullaby = catalog.add(Song::new("Lullaby", "", "Hush now\nGo to sleep"));

    // Page 1: a full-width song on top, two songs side by side below it.
    // Entries must be sorted by (page, position, song).
    let entries = vec![
        Entry::new(grace, 1, PositionKey::from_components([1])),
        Entry::new(shanty, 1, PositionKey::from_components([2, 1])).with_attribution(false),
        Entry::new(lullaby, 1, PositionKey::from_components([2, 2])),
        Entry::new(grace, 2, PositionKey::default()).with_twocolumn(true),
    ];

    let front = FrontMatter::new(Some("Campfire Songs".to_string()), None, true);
    let booklet = Booklet::new(front, catalog, entries);

    println!("Booklet created:");
    println!("  Songs: {}", booklet.catalog().len());
    println!("  Entries: {}", booklet.entries().len());

    for page in layout::paginate(&booklet)? {
        println!("  Page {}: {}", page.number(), page.root());
    }

    println!("\nRendering LaTeX...");
    let tex = BookletBuilder::default().render_tex(&booklet)?;

    println!("\n{tex}");
    Ok(())
}
