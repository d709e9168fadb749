// ABOUTME: Main entry point for the slides2scorm program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::warn;
use slides2scorm::{
    Config, PackageConfig, PackageOverrides, PrerenderedSlides, Rasterizer, SlideRef,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print progress information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the complete SCORM package from rendered slide images
    Package(PackageArgs),

    /// Generate only the HTML player documents
    Html(PackageArgs),

    /// Generate only imsmanifest.xml
    Manifest(PackageArgs),
}

#[derive(Args)]
struct PackageArgs {
    /// Directory holding slide_1.png .. slide_N.png; output is written here too
    #[arg(short, long)]
    input: PathBuf,

    /// Number of slides (discovered from the directory when omitted)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Text file with one slide title per line
    #[arg(long)]
    titles: Option<PathBuf>,

    /// Visual style: black, white, green or black-red
    #[arg(long)]
    style: Option<String>,

    /// Presentation title shown on every slide
    #[arg(long)]
    title: Option<String>,

    /// Presentation author shown on every slide
    #[arg(long)]
    author: Option<String>,

    /// Label sidebar entries and manifest items with slide titles
    #[arg(long)]
    slide_titles: bool,

    /// Show thumbnail images in the sidebar
    #[arg(long)]
    thumbnails: bool,

    /// Hide the sidebar
    #[arg(long)]
    fullscreen: bool,

    /// Identifier of the manifest
    #[arg(long)]
    identifier: Option<String>,

    /// File name of the package archive
    #[arg(long)]
    archive_name: Option<String>,
}

impl PackageArgs {
    fn overrides(&self) -> PackageOverrides {
        PackageOverrides {
            title: self.title.clone(),
            author: self.author.clone(),
            style: self.style.clone(),
            use_slide_titles: self.slide_titles,
            use_thumbnail_images: self.thumbnails,
            fullscreen: self.fullscreen,
            identifier: self.identifier.clone(),
            archive_name: self.archive_name.clone(),
        }
    }

    /// Resolve configuration and slides, rejecting an empty package
    fn prepare(&self, app_config: &Config) -> slides2scorm::Result<(PackageConfig, Vec<SlideRef>)> {
        let config = app_config.get_package_config(self.overrides())?;
        let rasterizer = PrerenderedSlides::new(self.count, self.titles.clone());
        let slides = rasterizer.rasterize(&self.input)?.slide_refs(&self.input);
        slides2scorm::pipeline::validate_request(&slides, &config)?;
        Ok((config, slides))
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Initialize the rayon thread pool when a worker count is configured
fn init_thread_pool(threads: Option<usize>) {
    if let Some(threads) = threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            warn!("Failed to configure {} worker threads: {}", threads, e);
        }
    }
}

fn run(command: &Commands, app_config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Package(args) => {
            println!("Executing package command...");
            let (config, slides) = args.prepare(app_config)?;
            let report = slides2scorm::synthesize(&slides, &config, &args.input)
                .with_context(|| format!("Failed to package slides in {:?}", args.input))?;
            println!(
                "SCORM package with {} slides created: {:?}",
                report.slide_count, report.archive
            );
            Ok(())
        }
        Commands::Html(args) => {
            println!("Executing html command...");
            let (config, slides) = args.prepare(app_config)?;
            let documents = slides2scorm::generate_player_documents(&slides, &config, &args.input)
                .with_context(|| format!("Failed to write player documents to {:?}", args.input))?;
            println!("{} player documents written to {:?}", documents.len(), args.input);
            Ok(())
        }
        Commands::Manifest(args) => {
            println!("Executing manifest command...");
            let (config, slides) = args.prepare(app_config)?;
            let manifest_path = slides2scorm::write_manifest(&slides, &config, &args.input)
                .with_context(|| format!("Failed to write manifest to {:?}", args.input))?;
            println!("Manifest written: {:?}", manifest_path);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let app_config = Config::from_env();
    init_thread_pool(app_config.threads);

    let result = match &cli.command {
        Some(command) => run(command, &app_config),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
