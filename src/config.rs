// ABOUTME: Configuration module for the slides2scorm application
// ABOUTME: Provides the package configuration and environment variable handling

use crate::errors::Result;
use crate::theme::Style;
use std::env;

pub const DEFAULT_IDENTIFIER: &str = "com.example.scorm";
pub const DEFAULT_ARCHIVE_NAME: &str = "scorm_package.zip";

/// Immutable settings for one packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub title: String,
    pub author: String,
    pub style: Style,
    pub use_slide_titles: bool,
    pub use_thumbnail_images: bool,
    pub fullscreen: bool,
    /// Identifier of the manifest root element
    pub identifier: String,
    pub archive_name: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            style: Style::default(),
            use_slide_titles: false,
            use_thumbnail_images: false,
            fullscreen: false,
            identifier: DEFAULT_IDENTIFIER.to_string(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

/// Per-invocation overrides, usually taken from the command line
#[derive(Debug, Default, Clone)]
pub struct PackageOverrides {
    pub title: Option<String>,
    pub author: Option<String>,
    pub style: Option<String>,
    pub use_slide_titles: bool,
    pub use_thumbnail_images: bool,
    pub fullscreen: bool,
    pub identifier: Option<String>,
    pub archive_name: Option<String>,
}

/// Global configuration for the application
pub struct Config {
    pub style: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub identifier: String,
    pub archive_name: String,
    /// Worker threads for document generation; `None` leaves rayon's default
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: None,
            title: None,
            author: None,
            identifier: DEFAULT_IDENTIFIER.to_string(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            threads: None,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let style = env::var("SCORM_STYLE").ok();
        let title = env::var("SCORM_TITLE").ok();
        let author = env::var("SCORM_AUTHOR").ok();
        let identifier =
            env::var("SCORM_IDENTIFIER").unwrap_or_else(|_| DEFAULT_IDENTIFIER.to_string());
        let archive_name =
            env::var("SCORM_ARCHIVE_NAME").unwrap_or_else(|_| DEFAULT_ARCHIVE_NAME.to_string());
        let threads = env::var("SCORM_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0);

        Self {
            style,
            title,
            author,
            identifier,
            archive_name,
            threads,
        }
    }

    /// Build the package configuration, letting overrides win over this config.
    /// Fails on an unknown style name.
    pub fn get_package_config(&self, overrides: PackageOverrides) -> Result<PackageConfig> {
        let style_name = overrides.style.or_else(|| self.style.clone());
        let style = Style::from_option(style_name.as_deref())?;

        Ok(PackageConfig {
            title: overrides
                .title
                .or_else(|| self.title.clone())
                .unwrap_or_default(),
            author: overrides
                .author
                .or_else(|| self.author.clone())
                .unwrap_or_default(),
            style,
            use_slide_titles: overrides.use_slide_titles,
            use_thumbnail_images: overrides.use_thumbnail_images,
            fullscreen: overrides.fullscreen,
            identifier: overrides
                .identifier
                .unwrap_or_else(|| self.identifier.clone()),
            archive_name: overrides
                .archive_name
                .unwrap_or_else(|| self.archive_name.clone()),
        })
    }
}
