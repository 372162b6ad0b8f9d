//! CLI logic for the songbook tool.
//!
//! This module contains the core CLI logic: loading configuration, reading
//! the booklet manifest and writing the rendered or exported files.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{fs, path::Path};

use log::{debug, info};

use songbook::{BookletBuilder, SongbookError};

/// Main document name used when the manifest path has no file stem.
const DEFAULT_DOCUMENT_STEM: &str = "booklet";

/// Run the songbook CLI application
///
/// # Errors
///
/// Returns `SongbookError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Manifest errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SongbookError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = BookletBuilder::new(app_config);

    let input = Path::new(args.command.input());
    info!(input_path = args.command.input(); "Processing booklet");

    let source = fs::read_to_string(input)?;
    let booklet = builder.parse(&source)?;

    match &args.command {
        Command::Render { output, .. } => {
            let tex = builder.render_tex(&booklet)?;
            fs::write(output, tex)?;
            info!(output_file = output; "LaTeX document written");
        }
        Command::Export { output, .. } => {
            let assets = input.parent().unwrap_or_else(|| Path::new(""));
            let export = builder.export(&booklet, assets)?;

            let output_dir = Path::new(output);
            fs::create_dir_all(output_dir)?;

            for file in export.files() {
                let path = output_dir.join(file.name());
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, file.content())?;
                debug!(path = path.display().to_string(); "Wrote export file");
            }

            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_DOCUMENT_STEM.to_string());
            let document = output_dir.join(format!("{stem}.tex"));
            fs::write(&document, export.document())?;

            info!(
                output_dir = output,
                files = export.files().len() + 1;
                "Booklet exported"
            );
        }
    }

    Ok(())
}
