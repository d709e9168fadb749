// ABOUTME: Player document generation for the slides2scorm application
// ABOUTME: Renders one self-contained HTML page per slide with sidebar and navigation

use crate::config::PackageConfig;
use crate::errors::{Result, ScormError, Stage};
use crate::navigation;
use crate::slides::{html_file_name, SlideRef};
use crate::theme::Theme;
use log::{debug, info};
use quick_xml::escape::escape;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the player document for `slide`, given every slide of the package
pub fn render_player_document(
    slide: &SlideRef,
    slides: &[SlideRef],
    config: &PackageConfig,
) -> String {
    let count = slides.len();
    let theme = config.style.theme();
    let edge = navigation::nav_edge(slide.index, count);

    let page_title = if config.title.is_empty() {
        format!("Slide {}", slide.index)
    } else {
        escape(config.title.as_str()).into_owned()
    };

    // Build the full HTML document
    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html_doc.push_str(&format!("<title>{}</title>\n", page_title));
    html_doc.push_str(&stylesheet(&theme));
    html_doc.push_str(&navigation_script(slide.index, edge.prev, edge.next));
    html_doc.push_str("</head>\n<body>\n");

    if !config.fullscreen {
        html_doc.push_str(&sidebar(slide, slides, config));
    }

    html_doc.push_str("<div class=\"content\">\n");
    if !config.title.is_empty() {
        html_doc.push_str(&format!(
            "<div class=\"slide-title\">{}</div>\n",
            escape(config.title.as_str())
        ));
    }
    html_doc.push_str(&format!(
        "<img class=\"slide-image\" src=\"{}\" alt=\"Slide {}\">\n",
        escape(slide.image_name().as_str()),
        slide.index
    ));
    html_doc.push_str(&format!(
        "<div class=\"slide-number\">Slide {} of {}</div>\n",
        slide.index, count
    ));
    html_doc.push_str("<div class=\"nav-buttons\">\n");
    html_doc.push_str(&format!(
        "<a class=\"nav-button\" id=\"nav-prev\" href=\"{}\">Previous</a>\n",
        html_file_name(edge.prev)
    ));
    html_doc.push_str(&format!(
        "<a class=\"nav-button\" id=\"nav-next\" href=\"{}\">Next</a>\n",
        html_file_name(edge.next)
    ));
    html_doc.push_str("</div>\n");
    if !config.author.is_empty() {
        html_doc.push_str(&format!(
            "<div class=\"author-note\">Author: {}</div>\n",
            escape(config.author.as_str())
        ));
    }
    html_doc.push_str("</div>\n");

    html_doc.push_str("</body>\n</html>\n");
    html_doc
}

/// Sidebar text for one entry: its title when titles are enabled, else its index
fn sidebar_label(entry: &SlideRef, config: &PackageConfig) -> String {
    match (&entry.title, config.use_slide_titles) {
        (Some(title), true) => escape(title.as_str()).into_owned(),
        _ => entry.index.to_string(),
    }
}

fn sidebar(current: &SlideRef, slides: &[SlideRef], config: &PackageConfig) -> String {
    let mut html = String::from("<div class=\"sidebar\">\n");

    for entry in slides {
        let active = entry.index == current.index;
        let class = if active { " class=\"active\"" } else { "" };
        let label = sidebar_label(entry, config);

        html.push_str("<div class=\"sidebar-entry\">");
        html.push_str(&format!("<a href=\"{}\">", entry.html_name()));
        if config.use_thumbnail_images {
            html.push_str(&format!(
                "<img{} id=\"thumb_{}\" src=\"{}\" alt=\"Slide {}\"></a><span>{}</span>",
                class,
                entry.index,
                escape(entry.image_name().as_str()),
                entry.index,
                label
            ));
        } else {
            html.push_str(&format!(
                "<span{} id=\"thumb_{}\">{}</span></a>",
                class, entry.index, label
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"<style>
body {{
    display: flex;
    height: 100vh;
    margin: 0;
    background: {background};
    color: {foreground};
    font-family: Arial, sans-serif;
}}
.content {{
    display: flex;
    justify-content: center;
    align-items: center;
    flex-direction: column;
    flex-grow: 1;
    position: relative;
}}
.slide-image {{
    max-width: 90%;
    max-height: 70vh;
}}
.nav-buttons {{
    margin-top: 20px;
}}
.nav-button {{
    display: inline-block;
    padding: 6px 15px;
    font-size: 14px;
    margin: 0 6px;
    background-color: #444;
    color: white;
    border-radius: 5px;
    text-decoration: none;
    transition: background-color 0.3s ease;
}}
.nav-button:hover {{
    background-color: #1abc9c;
}}
.sidebar {{
    width: 200px;
    min-width: 200px;
    background-color: #333;
    padding: 10px;
    overflow-y: auto;
    height: 100vh;
    box-sizing: border-box;
}}
.sidebar-entry {{
    text-align: center;
    margin-bottom: 10px;
}}
.sidebar-entry a {{
    text-decoration: none;
}}
.sidebar img {{
    width: 100%;
    background-color: #ccc;
    border: 2px solid transparent;
    transition: border 0.3s ease, background-color 0.3s ease;
}}
.sidebar img:hover {{
    border: 2px solid #1abc9c;
}}
.sidebar img.active {{
    border: 6px solid red;
    box-shadow: 0 0 10px 2px rgba(255, 0, 0, 0.5);
    background-color: #666;
}}
.sidebar span {{
    display: block;
    padding: 10px;
    font-size: 14px;
    color: {foreground};
    border: 2px solid transparent;
}}
.sidebar span.active {{
    border: 2px solid red;
    background-color: rgba(255, 0, 0, 0.2);
}}
.slide-number {{
    position: absolute;
    bottom: 20px;
    right: 20px;
    background-color: rgba(0, 0, 0, 0.5);
    color: white;
    padding: 5px 10px;
    border-radius: 5px;
    font-size: 16px;
}}
.slide-title {{
    position: absolute;
    top: 10px;
    left: 50%;
    transform: translateX(-50%);
    background-color: rgba(0, 0, 0, 0.5);
    color: {title_color};
    padding: 5px 10px;
    border-radius: 5px;
    font-size: 32px;
    text-align: center;
    width: 80%;
}}
.author-note {{
    position: absolute;
    bottom: 20px;
    left: 20px;
    background-color: rgba(0, 0, 0, 0.5);
    color: white;
    padding: 5px 10px;
    border-radius: 5px;
    font-size: 16px;
}}
</style>
"#,
        background = theme.background,
        foreground = theme.foreground,
        title_color = theme.title_color,
    )
}

/// Scrolls the active sidebar entry into view and binds the arrow keys
fn navigation_script(index: usize, prev: usize, next: usize) -> String {
    format!(
        r#"<script>
window.onload = function() {{
    var currentThumb = document.getElementById("thumb_{index}");
    if (currentThumb) {{
        currentThumb.scrollIntoView({{block: "center"}});
    }}
}};
document.addEventListener("keydown", function(e) {{
    if (e.key === "ArrowLeft") {{
        window.location.href = "{prev}";
    }} else if (e.key === "ArrowRight") {{
        window.location.href = "{next}";
    }}
}});
</script>
"#,
        index = index,
        prev = html_file_name(prev),
        next = html_file_name(next),
    )
}

/// Render and write the player documents of every slide into `output_dir`.
/// Documents are independent of each other and are produced in parallel.
pub fn generate_player_documents(
    slides: &[SlideRef],
    config: &PackageConfig,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    info!(
        "Generating {} player documents in {:?} (style: {})",
        slides.len(),
        output_dir,
        config.style
    );

    slides
        .par_iter()
        .map(|slide| -> Result<PathBuf> {
            let html_content = render_player_document(slide, slides, config);
            let output_path = output_dir.join(slide.html_name());
            debug!("Writing player document for slide {}", slide.index);
            write_html_to_file(&html_content, &output_path)?;
            Ok(output_path)
        })
        .collect()
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    debug!("Writing HTML to file: {:?}", output_path);

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ScormError::io(Stage::Documents, parent, e))?;
        }
    }

    fs::write(output_path, html_content)
        .map_err(|e| ScormError::io(Stage::Documents, output_path, e))?;

    Ok(())
}
