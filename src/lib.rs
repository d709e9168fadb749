// ABOUTME: Library module for the slides2scorm program.
// ABOUTME: Contains core functionality for turning slide images into a SCORM 1.2 package.

// Reexport modules
pub mod config;
pub mod errors;
pub mod html;
pub mod manifest;
pub mod navigation;
pub mod package;
pub mod pipeline;
pub mod slides;
pub mod theme;
pub mod utils;

// Reexport common types and functions
pub use config::{Config, PackageConfig, PackageOverrides};
pub use errors::{Result, ScormError, Stage};
pub use html::{generate_player_documents, render_player_document, write_html_to_file};
pub use manifest::{build_manifest, render_manifest, write_manifest, ManifestDescriptor};
pub use navigation::{nav_edges, NavEdge};
pub use package::{assemble_package, validate_inputs};
pub use pipeline::{synthesize, synthesize_with, SynthesisReport};
pub use slides::{resolve_slide_refs, PrerenderedSlides, RasterizedDeck, Rasterizer, SlideRef};
pub use theme::{Style, Theme};
