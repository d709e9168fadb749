use image::{ImageBuffer, Rgb};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipArchive;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slides2scorm"))
        .args(args)
        .env_remove("SCORM_STYLE")
        .env_remove("SCORM_ARCHIVE_NAME")
        .output()
        .expect("Failed to execute command")
}

fn create_slides(dir: &Path, count: usize) {
    for index in 1..=count {
        let img = ImageBuffer::from_fn(40, 30, |_, _| Rgb([255u8, 255u8, 255u8]));
        img.save(dir.join(format!("slide_{}.png", index)))
            .expect("Failed to save slide image");
    }
}

#[test]
fn test_package_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    create_slides(dir, 3);

    let output = run_command(&[
        "package",
        "-i",
        dir.to_str().unwrap(),
        "--style",
        "black-red",
        "--title",
        "Induction",
        "--thumbnails",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let archive_path = dir.join("scorm_package.zip");
    assert!(archive_path.exists(), "Archive was not created");

    let archive = ZipArchive::new(fs::File::open(&archive_path).unwrap())
        .expect("Failed to read archive");
    assert_eq!(archive.len(), 7);

    let html = fs::read_to_string(dir.join("slide_3.html")).unwrap();
    assert!(html.contains("linear-gradient(to bottom, black, red)"));
    assert!(html.contains(r#"<img class="active" id="thumb_3" src="slide_3.png""#));
}

#[test]
fn test_package_command_rejects_unknown_style() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_slides(temp_dir.path(), 2);

    let output = run_command(&[
        "package",
        "-i",
        temp_dir.path().to_str().unwrap(),
        "--style",
        "purple",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown style"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("slide_1.html").exists());
}

#[test]
fn test_package_command_reports_missing_slide() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_slides(temp_dir.path(), 1);

    let output = run_command(&[
        "package",
        "-i",
        temp_dir.path().to_str().unwrap(),
        "--count",
        "2",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("slide 2"), "stderr: {}", stderr);
    assert!(stderr.contains("Failed to package slides"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("scorm_package.zip").exists());
}

#[test]
fn test_package_command_rejects_empty_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(&["package", "-i", temp_dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one slide"), "stderr: {}", stderr);
}

#[test]
fn test_manifest_command_writes_only_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    create_slides(dir, 2);

    let output = run_command(&["manifest", "-i", dir.to_str().unwrap(), "--title", "Basics"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let manifest = fs::read_to_string(dir.join("imsmanifest.xml")).unwrap();
    assert!(manifest.contains("<title>Basics</title>"));
    assert!(manifest.contains(r#"<item identifier="ITEM-2" identifierref="RES-2">"#));
    assert!(!dir.join("slide_1.html").exists());
    assert!(!dir.join("scorm_package.zip").exists());
}

#[test]
fn test_html_command_writes_documents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    create_slides(dir, 2);

    let output = run_command(&["html", "-i", dir.to_str().unwrap(), "--fullscreen"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let html = fs::read_to_string(dir.join("slide_2.html")).unwrap();
    assert!(html.contains(r#"id="nav-next" href="slide_1.html""#));
    assert!(!html.contains(r#"<div class="sidebar">"#));
    assert!(!dir.join("imsmanifest.xml").exists());
}
