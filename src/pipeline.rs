// ABOUTME: Build pipeline for the termconf application
// ABOUTME: Runs loading, sectioning, rendering, assembly and the optional PDF step in order

use log::{info, warn};
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::convert::{render_sections, Converter, PandocConverter};
use crate::errors::Result;
use crate::loader::{load_config, load_content};
use crate::pdf::{generate_pdf, PDF_REMEDIATION};
use crate::sections::split_sections;
use crate::site::assemble_site;
use crate::utils::generation_date;

/// What a build produced
#[derive(Debug, Default)]
pub struct BuildReport {
    pub title: String,
    pub section_count: usize,
    pub artifacts: Vec<PathBuf>,
    pub pdf: Option<PathBuf>,
}

/// Run the full pipeline with pandoc as the section converter
pub fn run_build(build: &BuildConfig) -> Result<BuildReport> {
    let converter = PandocConverter::new(build.pandoc_path.clone(), &build.root);
    run_build_with(build, &converter)
}

/// Run the full pipeline with a caller-supplied section converter.
///
/// Only missing inputs abort the build; conversion and PDF failures are
/// logged and degrade the output instead.
pub fn run_build_with(build: &BuildConfig, converter: &dyn Converter) -> Result<BuildReport> {
    info!("Starting build in {:?} ({} layout)", build.root, build.layout);
    let paths = build.paths();

    let config = load_config(&paths)?;
    let content = load_content(&paths)?;

    let sections = split_sections(&content);
    info!("Found {} sections", sections.len());

    let rendered = render_sections(&sections, converter);
    let generated_on = generation_date();

    let artifacts = assemble_site(build, &config, &rendered, &generated_on)?;

    let pdf = if build.generate_pdf {
        match generate_pdf(build, &config, &paths.content, &paths.pdf, &generated_on) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("⚠ PDF generation skipped: {}", e);
                warn!("  To enable PDF output, {}", PDF_REMEDIATION);
                None
            }
        }
    } else {
        info!("PDF generation disabled");
        None
    };

    info!("✓ Build complete!");

    Ok(BuildReport {
        title: config.conference.title.clone(),
        section_count: rendered.len(),
        artifacts,
        pdf,
    })
}
