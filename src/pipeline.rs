// ABOUTME: End-to-end package synthesis for the slides2scorm application
// ABOUTME: Runs rasterizer output through documents, manifest and archive assembly

use crate::config::PackageConfig;
use crate::errors::{Result, ScormError};
use crate::html;
use crate::manifest;
use crate::package;
use crate::slides::{Rasterizer, SlideRef};
use crate::utils;
use log::info;
use std::path::{Path, PathBuf};

/// Files produced by a successful synthesis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisReport {
    pub slide_count: usize,
    pub documents: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub archive: PathBuf,
}

/// Reject settings that cannot produce a usable package
pub fn validate_request(slides: &[SlideRef], config: &PackageConfig) -> Result<()> {
    if slides.is_empty() {
        return Err(ScormError::InvalidConfig(
            "A package needs at least one slide".to_string(),
        ));
    }
    let name = config.archive_name.as_str();
    let has_separator = name.contains(|c: char| c == '/' || c == '\\');
    if name.is_empty() || has_separator || name == "." || name == ".." {
        return Err(ScormError::InvalidConfig(format!(
            "Archive name must be a plain file name: '{}'",
            name
        )));
    }
    if slides.iter().any(|slide| slide.html_name() == name || slide.image_name() == name)
        || name == manifest::MANIFEST_FILE_NAME
    {
        return Err(ScormError::InvalidConfig(format!(
            "Archive name '{}' collides with a package file",
            name
        )));
    }
    Ok(())
}

/// Generate documents and manifest for `slides` in `output_dir`, then archive them.
/// Any failure aborts the run; no archive is left behind.
pub fn synthesize(
    slides: &[SlideRef],
    config: &PackageConfig,
    output_dir: &Path,
) -> Result<SynthesisReport> {
    validate_request(slides, config)?;
    utils::validate_directory_writable(output_dir)?;

    info!(
        "Synthesizing SCORM package for {} slides in {:?}",
        slides.len(),
        output_dir
    );

    let documents = html::generate_player_documents(slides, config, output_dir)?;
    let manifest_path = manifest::write_manifest(slides, config, output_dir)?;
    let archive_path = output_dir.join(&config.archive_name);
    let archive = package::assemble_package(slides, &documents, &manifest_path, &archive_path)?;

    Ok(SynthesisReport {
        slide_count: slides.len(),
        documents,
        manifest: manifest_path,
        archive,
    })
}

/// Rasterize into `output_dir` with `rasterizer`, then synthesize the package
pub fn synthesize_with<R: Rasterizer + ?Sized>(
    rasterizer: &R,
    config: &PackageConfig,
    output_dir: &Path,
) -> Result<SynthesisReport> {
    let deck = rasterizer.rasterize(output_dir)?;
    let slides = deck.slide_refs(output_dir);
    synthesize(&slides, config, output_dir)
}
