// ABOUTME: Utility functions for the slides2scorm application
// ABOUTME: Provides helper functions for path validation and file naming

use crate::errors::{Result, ScormError};
use log::warn;
use std::fs::File;
use std::path::Path;

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ScormError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(ScormError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| {
            ScormError::ValidationError(format!("Failed to create directory {:?}: {}", path, e))
        })?;
    } else if !path.is_dir() {
        return Err(ScormError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Validate write permissions for a directory
pub fn validate_directory_writable(path: &Path) -> Result<()> {
    // First ensure it exists
    ensure_directory_exists(path)?;

    // Try to create a temporary file to test write permissions
    let test_file = path.join(format!("test_write_{}.tmp", uuid::Uuid::new_v4()));
    match File::create(&test_file) {
        Ok(_) => {
            // Clean up the test file
            if let Err(e) = std::fs::remove_file(&test_file) {
                warn!("Failed to clean up test file {:?}: {}", test_file, e);
            }
            Ok(())
        }
        Err(e) => Err(ScormError::ValidationError(format!(
            "Directory is not writable: {:?} - {}",
            path, e
        ))),
    }
}

/// Final component of a path as an owned string
pub fn file_basename(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
