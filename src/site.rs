// ABOUTME: Site assembly for the termconf application
// ABOUTME: Writes sections.json, config.js, index.html and print.html

use std::path::PathBuf;

use crate::conference::ConferenceConfig;
use crate::config::BuildConfig;
use crate::errors::Result;
use crate::html::generate_index_html;
use crate::print::generate_print_html;
use crate::sections::SectionMap;
use crate::utils::write_artifact;

/// Pretty-printed JSON object of rendered sections, in map order
pub fn sections_json(rendered: &SectionMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(rendered)?)
}

/// Script defining `window.CONFERENCE_CONFIG` from the parsed config tree
pub fn config_script(config: &ConferenceConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(config.raw())?;
    Ok(format!(
        "// Auto-generated configuration\nwindow.CONFERENCE_CONFIG = {};\n",
        json
    ))
}

/// Write the four site artifacts and return their paths in write order
pub fn assemble_site(
    build: &BuildConfig,
    config: &ConferenceConfig,
    rendered: &SectionMap,
    generated_on: &str,
) -> Result<Vec<PathBuf>> {
    let paths = build.paths();

    write_artifact(&paths.sections, &sections_json(rendered)?)?;
    write_artifact(&paths.config_script, &config_script(config)?)?;
    write_artifact(&paths.index, &generate_index_html(config, build.layout))?;
    write_artifact(
        &paths.print,
        &generate_print_html(config, rendered, generated_on),
    )?;

    Ok(vec![paths.sections, paths.config_script, paths.index, paths.print])
}
