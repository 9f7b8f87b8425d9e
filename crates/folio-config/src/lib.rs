//! Configuration loading for the folio portfolio app.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/folio/` on Linux). A missing file means defaults; a file
//! that exists but does not parse is a startup error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::Project;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub backdrop: BackdropConfig,
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
    /// Carousel slides, in display order.
    pub projects: Vec<Project>,
}

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Name shown in the hero line.
    pub name: String,
    /// Tagline shown under the name.
    pub tagline: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Kajal Patel".to_string(),
            tagline: "Software Developer".to_string(),
        }
    }
}

/// Particle backdrop settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Whether to render the animated backdrop at all.
    pub enabled: bool,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Project carousel settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between automatic slide advances.
    pub autoplay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { autoplay_ms: 5000 }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address the composed mail is addressed to.
    pub email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "ikajalpatel21@gmail.com".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file, if a platform config directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            log::debug!("no config directory available, using defaults");
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file is not an error; every other failure is.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(toml::from_str(&raw)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.backdrop.enabled);
        assert_eq!(config.carousel.autoplay_ms, 5000);
        assert_eq!(config.contact.email, "ikajalpatel21@gmail.com");
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            [profile]
            name = "Ada Lovelace"
            tagline = "Analyst"

            [backdrop]
            enabled = false

            [carousel]
            autoplay_ms = 8000

            [contact]
            email = "ada@example.com"

            [[projects]]
            title = "Notes on the Analytical Engine"
            description = "Annotated translation with original appendices."
            url = "https://example.com/notes"

            [[projects]]
            title = "Bernoulli program"
            description = "First published machine algorithm."
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.profile.name, "Ada Lovelace");
        assert!(!config.backdrop.enabled);
        assert_eq!(config.carousel.autoplay_ms, 8000);
        assert_eq!(config.contact.email, "ada@example.com");
        assert_eq!(config.projects.len(), 2);
        assert_eq!(
            config.projects[1],
            Project {
                title: "Bernoulli program".to_string(),
                description: "First published machine algorithm.".to_string(),
                url: None,
            }
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let raw = r#"
            [contact]
            email = "someone@example.com"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.contact.email, "someone@example.com");
        assert!(config.backdrop.enabled);
        assert_eq!(config.carousel.autoplay_ms, 5000);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(toml::from_str::<Config>("backdrop = 3").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/folio/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
