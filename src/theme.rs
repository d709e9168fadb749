// ABOUTME: Style themes for the generated player documents
// ABOUTME: Maps the named style of a package to its fixed colour palette

use crate::errors::{Result, ScormError};
use std::fmt;
use std::str::FromStr;

/// Named visual style of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Black,
    White,
    Green,
    BlackRed,
}

/// Colours applied uniformly across every player document of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// CSS `background` value for the page body
    pub background: &'static str,
    pub foreground: &'static str,
    pub title_color: &'static str,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Black, Style::White, Style::Green, Style::BlackRed];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Black => "black",
            Style::White => "white",
            Style::Green => "green",
            Style::BlackRed => "black-red",
        }
    }

    /// Palette for this style
    pub fn theme(&self) -> Theme {
        match self {
            Style::Black => Theme {
                background: "#1a1a1a",
                foreground: "white",
                title_color: "white",
            },
            Style::White => Theme {
                background: "white",
                foreground: "black",
                title_color: "black",
            },
            Style::Green => Theme {
                background: "#013220",
                foreground: "white",
                title_color: "white",
            },
            Style::BlackRed => Theme {
                background: "linear-gradient(to bottom, black, red)",
                foreground: "white",
                title_color: "white",
            },
        }
    }

    /// Parse an optional style name, falling back to black only when none was given
    pub fn from_option(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Style::default()),
            Some(name) => name.parse(),
        }
    }
}

impl FromStr for Style {
    type Err = ScormError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
            .ok_or_else(|| {
                ScormError::InvalidConfig(format!(
                    "Unknown style '{}'. Expected one of: black, white, green, black-red",
                    s
                ))
            })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_style() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>().unwrap(), style);
        }
        assert_eq!(" Black-Red ".parse::<Style>().unwrap(), Style::BlackRed);
    }

    #[test]
    fn unknown_style_is_a_config_error() {
        let err = "purple".parse::<Style>().unwrap_err();
        assert!(matches!(err, ScormError::InvalidConfig(_)));
        assert!(Style::from_option(Some("")).is_err());
    }

    #[test]
    fn missing_style_defaults_to_black() {
        assert_eq!(Style::from_option(None).unwrap(), Style::Black);
    }

    #[test]
    fn palette_matches_style() {
        assert_eq!(Style::Black.theme().background, "#1a1a1a");
        assert_eq!(Style::White.theme().foreground, "black");
        assert_eq!(Style::Green.theme().background, "#013220");
        assert!(Style::BlackRed.theme().background.starts_with("linear-gradient"));
    }
}
