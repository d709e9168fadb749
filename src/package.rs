// ABOUTME: Package assembly for the slides2scorm application
// ABOUTME: Verifies every package file and writes them into a single flat ZIP archive

use crate::errors::{Result, ScormError, Stage};
use crate::manifest::MANIFEST_FILE_NAME;
use crate::slides::SlideRef;
use crate::utils;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// One file to be stored in the archive under a flat entry name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub source: PathBuf,
}

fn check_readable(path: &Path, slide: Option<usize>) -> Result<()> {
    if !path.is_file() {
        return Err(ScormError::MissingInput {
            stage: Stage::Assembly,
            slide,
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|e| ScormError::io(Stage::Assembly, path, e))?;
    Ok(())
}

fn entry_for(path: &Path) -> Result<ArchiveEntry> {
    let name = utils::file_basename(path).ok_or_else(|| {
        ScormError::ValidationError(format!("Path has no file name: {:?}", path))
    })?;
    Ok(ArchiveEntry {
        name,
        source: path.to_path_buf(),
    })
}

/// Check that every image, document and the manifest exist and are readable.
/// Returns the archive entries in write order: images, documents, manifest.
pub fn validate_inputs(
    slides: &[SlideRef],
    html_paths: &[PathBuf],
    manifest_path: &Path,
) -> Result<Vec<ArchiveEntry>> {
    if html_paths.len() != slides.len() {
        return Err(ScormError::ValidationError(format!(
            "Expected {} player documents, got {}",
            slides.len(),
            html_paths.len()
        )));
    }

    let mut entries = Vec::with_capacity(slides.len() * 2 + 1);

    for slide in slides {
        check_readable(&slide.image_path, Some(slide.index))?;
        entries.push(entry_for(&slide.image_path)?);
    }
    for (slide, html_path) in slides.iter().zip(html_paths) {
        check_readable(html_path, Some(slide.index))?;
        entries.push(entry_for(html_path)?);
    }
    check_readable(manifest_path, None)?;
    entries.push(ArchiveEntry {
        name: MANIFEST_FILE_NAME.to_string(),
        source: manifest_path.to_path_buf(),
    });

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(ScormError::ValidationError(format!(
                "Duplicate archive entry name: {}",
                entry.name
            )));
        }
    }

    Ok(entries)
}

fn entry_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

fn write_entries(file: File, entries: &[ArchiveEntry]) -> Result<()> {
    let mut zip = ZipWriter::new(file);

    for entry in entries {
        debug!("Adding {} to archive", entry.name);
        let data =
            fs::read(&entry.source).map_err(|e| ScormError::io(Stage::Assembly, &entry.source, e))?;
        zip.start_file(entry.name.as_str(), entry_options())?;
        zip.write_all(&data)
            .map_err(|e| ScormError::io(Stage::Assembly, &entry.source, e))?;
    }

    // Finalize the ZIP file
    let mut file = zip.finish()?;
    file.flush()
        .map_err(|e| ScormError::ArchiveError(format!("Failed to flush archive: {}", e)))?;
    file.sync_all()
        .map_err(|e| ScormError::ArchiveError(format!("Failed to sync archive: {}", e)))?;
    Ok(())
}

/// Write the package archive at `archive_path`.
///
/// All inputs are verified before anything is written. The archive is built in
/// a sibling temporary file that is renamed into place only once complete, so
/// a failed run never leaves a truncated archive at `archive_path`.
pub fn assemble_package(
    slides: &[SlideRef],
    html_paths: &[PathBuf],
    manifest_path: &Path,
    archive_path: &Path,
) -> Result<PathBuf> {
    info!("Assembling package {:?}", archive_path);

    let entries = validate_inputs(slides, html_paths, manifest_path)?;

    let archive_name = utils::file_basename(archive_path).ok_or_else(|| {
        ScormError::InvalidConfig(format!("Invalid archive path: {:?}", archive_path))
    })?;
    let temp_path =
        archive_path.with_file_name(format!(".{}.{}.part", archive_name, uuid::Uuid::new_v4()));

    // create_new makes this run the only writer of the temporary archive
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| ScormError::io(Stage::Assembly, &temp_path, e))?;

    let written = write_entries(file, &entries).and_then(|()| {
        fs::rename(&temp_path, archive_path)
            .map_err(|e| ScormError::io(Stage::Assembly, archive_path, e))
    });

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            warn!("Failed to remove partial archive {:?}: {}", temp_path, cleanup);
        }
        return Err(e);
    }

    info!(
        "Package created at {:?} with {} entries",
        archive_path,
        entries.len()
    );
    Ok(archive_path.to_path_buf())
}
