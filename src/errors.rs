// ABOUTME: Error types for the slides2scorm application
// ABOUTME: Provides structured error handling for each stage of the packaging pipeline

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage an error was raised in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Documents,
    Manifest,
    Assembly,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolve => "slide resolution",
            Stage::Documents => "player documents",
            Stage::Manifest => "manifest",
            Stage::Assembly => "package assembly",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ScormError {
    #[error(
        "Missing input during {stage}{}: {path:?}",
        .slide.map(|n| format!(" (slide {})", n)).unwrap_or_default()
    )]
    MissingInput {
        stage: Stage,
        slide: Option<usize>,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O failure during {stage} on {path:?}: {source}")]
    IoFailure {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest serialization error: {0}")]
    ManifestError(String),

    #[error("Archive error: {0}")]
    ArchiveError(String),

    #[error("Unreadable slide image {path:?}: {message}")]
    ImageError { path: PathBuf, message: String },

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),
}

impl ScormError {
    /// Wrap an I/O error with the stage and file it happened on
    pub fn io(stage: Stage, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScormError::IoFailure {
            stage,
            path: path.into(),
            source,
        }
    }

    /// The stage this error belongs to, when it is tied to one
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ScormError::MissingInput { stage, .. } | ScormError::IoFailure { stage, .. } => {
                Some(*stage)
            }
            ScormError::ManifestError(_) => Some(Stage::Manifest),
            ScormError::ArchiveError(_) => Some(Stage::Assembly),
            _ => None,
        }
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for ScormError {
    fn from(err: zip::result::ZipError) -> Self {
        ScormError::ArchiveError(format!("ZIP operation failed: {}", err))
    }
}

impl From<quick_xml::Error> for ScormError {
    fn from(err: quick_xml::Error) -> Self {
        ScormError::ManifestError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScormError>;
