// ABOUTME: Input loading for the termconf application
// ABOUTME: Resolves primary/fallback input files and parses the conference config

use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::conference::ConferenceConfig;
use crate::config::OutputPaths;
use crate::errors::{Result, SiteError};

/// Make sure `primary` exists, seeding it from `fallback` when it does not.
///
/// The copy is byte-for-byte. Fails with [`SiteError::MissingInput`] when
/// neither file is present.
pub fn ensure_input(kind: &'static str, primary: &Path, fallback: &Path) -> Result<()> {
    if primary.exists() {
        return Ok(());
    }

    if fallback.exists() {
        warn!(
            "{} not found at {:?}, using {:?}",
            kind, primary, fallback
        );
        fs::copy(fallback, primary)?;
        return Ok(());
    }

    Err(SiteError::MissingInput {
        kind,
        primary: primary.to_path_buf(),
        fallback: fallback.to_path_buf(),
    })
}

/// Resolve and parse the conference configuration
pub fn load_config(paths: &OutputPaths) -> Result<ConferenceConfig> {
    ensure_input("config", &paths.config, &paths.example_config)?;
    let text = fs::read_to_string(&paths.config)?;
    let config = ConferenceConfig::from_yaml(&text)?;
    info!("Building site for: {}", config.conference.title);
    Ok(config)
}

/// Resolve and read the Markdown content document
pub fn load_content(paths: &OutputPaths) -> Result<String> {
    ensure_input("content", &paths.content, &paths.example_content)?;
    Ok(fs::read_to_string(&paths.content)?)
}
