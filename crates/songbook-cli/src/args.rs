//! Command-line argument definitions for the songbook CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects between rendering a single document
//! and exporting a document with separate song files; global options select
//! the configuration file and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the songbook tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// What to do with the booklet manifest.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a booklet manifest to a single LaTeX document
    Render {
        /// Path to the booklet manifest (TOML)
        input: String,

        /// Path to the output LaTeX file
        #[arg(short, long, default_value = "out.tex")]
        output: String,
    },

    /// Export a booklet as a main document plus one file per song
    Export {
        /// Path to the booklet manifest (TOML)
        input: String,

        /// Directory the files are written to
        #[arg(short, long, default_value = "out")]
        output: String,
    },
}

impl Command {
    /// Path to the booklet manifest.
    pub fn input(&self) -> &str {
        match self {
            Self::Render { input, .. } | Self::Export { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let args = Args::try_parse_from(["songbook", "render", "book.toml"]).expect("valid args");

        assert_eq!(args.log_level, "info");
        assert_eq!(args.config, None);
        match args.command {
            Command::Render { input, output } => {
                assert_eq!(input, "book.toml");
                assert_eq!(output, "out.tex");
            }
            Command::Export { .. } => panic!("Expected render"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "songbook",
            "export",
            "book.toml",
            "-o",
            "dist",
            "--config",
            "songbook.toml",
            "--log-level",
            "debug",
        ])
        .expect("valid args");

        assert_eq!(args.config.as_deref(), Some("songbook.toml"));
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.command.input(), "book.toml");
        assert!(matches!(args.command, Command::Export { ref output, .. } if output == "dist"));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["songbook"]).is_err());
    }
}
