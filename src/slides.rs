// ABOUTME: Slide image references and the rasterizer collaborator interface
// ABOUTME: Resolves the canonical slide_{n}.png layout of an output directory

use crate::errors::{Result, ScormError, Stage};
use crate::utils;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// One rendered slide of a package. Indices are 1-based and contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRef {
    pub index: usize,
    pub image_path: PathBuf,
    pub title: Option<String>,
}

impl SlideRef {
    /// File name of the player document for this slide
    pub fn html_name(&self) -> String {
        html_file_name(self.index)
    }

    /// File name of the slide image, as referenced from documents and the manifest
    pub fn image_name(&self) -> String {
        utils::file_basename(&self.image_path).unwrap_or_else(|| image_file_name(self.index))
    }

    /// Label for menus: the slide title when present, otherwise `Slide N`
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Slide {}", self.index),
        }
    }
}

pub fn image_file_name(index: usize) -> String {
    format!("slide_{}.png", index)
}

pub fn html_file_name(index: usize) -> String {
    format!("slide_{}.html", index)
}

/// Produce the ordered references `slide_1.png` .. `slide_N.png` inside `dir`.
/// A count of zero yields an empty sequence.
pub fn resolve_slide_refs(dir: &Path, count: usize) -> Vec<SlideRef> {
    (1..=count)
        .map(|index| SlideRef {
            index,
            image_path: dir.join(image_file_name(index)),
            title: None,
        })
        .collect()
}

/// Attach titles positionally; missing or blank entries leave the slide untitled
pub fn apply_titles(slides: &mut [SlideRef], titles: &[Option<String>]) {
    for (slide, title) in slides.iter_mut().zip(titles) {
        slide.title = title
            .as_ref()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
    }
}

/// Output of a rasterizer run: how many slides were rendered and their titles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RasterizedDeck {
    pub count: usize,
    /// Per-slide titles in slide order; may be shorter than `count`
    pub titles: Vec<Option<String>>,
}

impl RasterizedDeck {
    /// References for the rendered images in `dir`, with titles attached
    pub fn slide_refs(&self, dir: &Path) -> Vec<SlideRef> {
        let mut slides = resolve_slide_refs(dir, self.count);
        apply_titles(&mut slides, &self.titles);
        slides
    }
}

/// Anything able to render a presentation into `slide_{n}.png` files in a directory
pub trait Rasterizer {
    fn rasterize(&self, output_dir: &Path) -> Result<RasterizedDeck>;
}

/// Rasterizer for slides that an external application has already exported
pub struct PrerenderedSlides {
    /// Known slide count; discovered from the directory when absent
    pub count: Option<usize>,
    pub titles_file: Option<PathBuf>,
}

impl PrerenderedSlides {
    pub fn new(count: Option<usize>, titles_file: Option<PathBuf>) -> Self {
        Self { count, titles_file }
    }
}

impl Rasterizer for PrerenderedSlides {
    fn rasterize(&self, output_dir: &Path) -> Result<RasterizedDeck> {
        utils::validate_directory_exists(output_dir)?;

        let count = match self.count {
            Some(count) => count,
            None => count_slides(output_dir)?,
        };
        info!("Using {} pre-rendered slides in {:?}", count, output_dir);

        // Only images that are present are checked here; absent ones are
        // reported by the package assembler.
        for slide in resolve_slide_refs(output_dir, count) {
            if slide.image_path.is_file() {
                verify_image(&slide.image_path)?;
            }
        }

        let titles = match &self.titles_file {
            Some(path) => load_titles(path)?,
            None => Vec::new(),
        };

        Ok(RasterizedDeck { count, titles })
    }
}

/// Check that a rendered slide decodes as an image
pub fn verify_image(path: &Path) -> Result<()> {
    let (width, height) =
        image::image_dimensions(path).map_err(|e| ScormError::ImageError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!("Slide image {:?} is {}x{}", path, width, height);
    Ok(())
}

/// Find slide images that match a pattern in a directory
pub fn find_slide_images(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    // The directory is matched literally; only `pattern` is a glob
    let glob_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let mut paths = Vec::new();

    for entry in (glob::glob(&glob_pattern)
        .map_err(|e| ScormError::ValidationError(format!("Invalid glob pattern: {}", e)))?)
    .flatten()
    {
        paths.push(entry);
    }

    paths.sort();
    Ok(paths)
}

/// Parse the index out of a canonical `slide_{n}.png` file name.
/// Zero-padded names such as `slide_01.png` are not slide images.
pub fn slide_index_from_name(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("slide_")?.strip_suffix(".png")?;
    digits
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0 && n.to_string() == digits)
}

/// Slide count of a directory: the highest `n` among its `slide_{n}.png` files
pub fn count_slides(dir: &Path) -> Result<usize> {
    let count = find_slide_images(dir, "slide_*.png")?
        .iter()
        .filter_map(|path| utils::file_basename(path))
        .filter_map(|name| slide_index_from_name(&name))
        .max()
        .unwrap_or(0);
    Ok(count)
}

/// Read one title per line; blank lines mean "no title" for that slide
pub fn load_titles(path: &Path) -> Result<Vec<Option<String>>> {
    if !path.is_file() {
        return Err(ScormError::MissingInput {
            stage: Stage::Resolve,
            slide: None,
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| ScormError::io(Stage::Resolve, path, e))?;

    Ok(content
        .lines()
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect())
}
