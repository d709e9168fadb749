// ABOUTME: IMS manifest generation for the slides2scorm application
// ABOUTME: Describes the package organization and per-slide resources as SCORM 1.2 XML

use crate::config::PackageConfig;
use crate::errors::{Result, ScormError, Stage};
use crate::slides::SlideRef;
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "imsmanifest.xml";
pub const ORGANIZATION_ID: &str = "ORG";
const DEFAULT_ORGANIZATION_TITLE: &str = "SCORM Course";
const IMSCP_NAMESPACE: &str = "http://www.imsproject.org/xsd/imscp_rootv1p1p2";
const ADLCP_NAMESPACE: &str = "http://www.adlnet.org/xsd/adlcp_rootv1p2";

/// Navigable entry of the organization tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub identifier: String,
    pub identifierref: String,
    pub title: String,
}

/// Web content launched by an item, with the files it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub identifier: String,
    pub href: String,
    pub files: Vec<String>,
}

/// In-memory manifest, one item and one resource per slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDescriptor {
    pub identifier: String,
    pub organization_title: String,
    pub items: Vec<Item>,
    pub resources: Vec<Resource>,
}

pub fn item_id(index: usize) -> String {
    format!("ITEM-{}", index)
}

pub fn resource_id(index: usize) -> String {
    format!("RES-{}", index)
}

/// Build the manifest tree. Identifiers depend only on each slide's index.
pub fn build_manifest(slides: &[SlideRef], config: &PackageConfig) -> ManifestDescriptor {
    let items = slides
        .iter()
        .map(|slide| Item {
            identifier: item_id(slide.index),
            identifierref: resource_id(slide.index),
            title: if config.use_slide_titles {
                slide.display_title()
            } else {
                format!("Slide {}", slide.index)
            },
        })
        .collect();

    let resources = slides
        .iter()
        .map(|slide| Resource {
            identifier: resource_id(slide.index),
            href: slide.html_name(),
            files: vec![slide.html_name(), slide.image_name()],
        })
        .collect();

    let organization_title = if config.title.is_empty() {
        DEFAULT_ORGANIZATION_TITLE.to_string()
    } else {
        config.title.clone()
    };

    ManifestDescriptor {
        identifier: config.identifier.clone(),
        organization_title,
        items,
        resources,
    }
}

impl ManifestDescriptor {
    /// Every file name referenced by the resources, in declaration order
    pub fn referenced_files(&self) -> Vec<&str> {
        self.resources
            .iter()
            .flat_map(|resource| resource.files.iter().map(String::as_str))
            .collect()
    }
}

fn write_text_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Serialize the manifest to XML
pub fn render_manifest(manifest: &ManifestDescriptor) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root = BytesStart::new("manifest").with_attributes([
        ("identifier", manifest.identifier.as_str()),
        ("version", "1.2"),
        ("xmlns", IMSCP_NAMESPACE),
        ("xmlns:adlcp", ADLCP_NAMESPACE),
    ]);
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("metadata")))?;
    write_text_element(&mut writer, "schema", "ADL SCORM")?;
    write_text_element(&mut writer, "schemaversion", "1.2")?;
    writer.write_event(Event::End(BytesEnd::new("metadata")))?;

    writer.write_event(Event::Start(
        BytesStart::new("organizations").with_attributes([("default", ORGANIZATION_ID)]),
    ))?;
    writer.write_event(Event::Start(
        BytesStart::new("organization").with_attributes([("identifier", ORGANIZATION_ID)]),
    ))?;
    write_text_element(&mut writer, "title", &manifest.organization_title)?;
    for item in &manifest.items {
        writer.write_event(Event::Start(BytesStart::new("item").with_attributes([
            ("identifier", item.identifier.as_str()),
            ("identifierref", item.identifierref.as_str()),
        ])))?;
        write_text_element(&mut writer, "title", &item.title)?;
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("organization")))?;
    writer.write_event(Event::End(BytesEnd::new("organizations")))?;

    writer.write_event(Event::Start(BytesStart::new("resources")))?;
    for resource in &manifest.resources {
        writer.write_event(Event::Start(BytesStart::new("resource").with_attributes([
            ("identifier", resource.identifier.as_str()),
            ("type", "webcontent"),
            ("adlcp:scormtype", "asset"),
            ("href", resource.href.as_str()),
        ])))?;
        for file in &resource.files {
            writer.write_event(Event::Empty(
                BytesStart::new("file").with_attributes([("href", file.as_str())]),
            ))?;
        }
        writer.write_event(Event::End(BytesEnd::new("resource")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("resources")))?;

    writer.write_event(Event::End(BytesEnd::new("manifest")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| ScormError::ManifestError(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

/// Build, serialize and write `imsmanifest.xml` into `output_dir`
pub fn write_manifest(
    slides: &[SlideRef],
    config: &PackageConfig,
    output_dir: &Path,
) -> Result<PathBuf> {
    let manifest = build_manifest(slides, config);
    info!(
        "Writing manifest with {} items to {:?}",
        manifest.items.len(),
        output_dir
    );

    let xml = render_manifest(&manifest)?;
    let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, xml).map_err(|e| ScormError::io(Stage::Manifest, &manifest_path, e))?;

    Ok(manifest_path)
}
