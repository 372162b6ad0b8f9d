//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use songbook::{SongbookError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for SongbookError {
    fn from(err: ConfigError) -> Self {
        SongbookError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (songbook/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SongbookError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("songbook/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "songbook", "songbook") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SongbookError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

/// Song files must land inside the export directory.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let export = config.export();

    let songs_dir = Path::new(export.songs_dir());
    if export.songs_dir().is_empty() || songs_dir.is_absolute() {
        return Err(ConfigError::Validation(format!(
            "export.songs_dir must be a relative directory, got `{}`",
            export.songs_dir()
        )));
    }
    if songs_dir
        .components()
        .any(|component| matches!(component, std::path::Component::ParentDir))
    {
        return Err(ConfigError::Validation(format!(
            "export.songs_dir must not leave the export directory, got `{}`",
            export.songs_dir()
        )));
    }

    let extension = export.extension();
    if extension.is_empty() || extension.contains(['.', '/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "export.extension must be a bare extension such as `tex`, got `{extension}`"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use songbook::config::LyricsMode;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(file.path(), content).expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_explicit_config() {
        let file = write_config(
            r#"
            [render]
            lyrics = "include"

            [export]
            songs_dir = "songs"
            "#,
        );

        let config = load_config(Some(file.path())).expect("Failed to load config");
        assert_eq!(config.render().lyrics(), LyricsMode::Include);
        assert_eq!(config.export().songs_dir(), "songs");
        assert_eq!(config.export().extension(), "tex");
    }

    #[test]
    fn test_missing_explicit_config() {
        let result = load_config(Some("/nonexistent/songbook/config.toml"));
        assert!(matches!(result, Err(SongbookError::Io(_))));
    }

    #[test]
    fn test_malformed_config() {
        let file = write_config("[render]\nlyrics = \"sideways\"\n");
        let err = load_config(Some(file.path())).expect_err("unknown lyrics mode");
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }

    #[test]
    fn test_validation() {
        for content in [
            "[export]\nsongs_dir = \"\"\n",
            "[export]\nsongs_dir = \"/tmp/songs\"\n",
            "[export]\nsongs_dir = \"../songs\"\n",
            "[export]\nextension = \".tex\"\n",
        ] {
            let file = write_config(content);
            let err = load_config(Some(file.path())).expect_err("invalid config");
            assert!(
                err.to_string().contains("Validation error"),
                "unexpected error for {content:?}: {err}"
            );
        }
    }
}
