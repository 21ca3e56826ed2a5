// ABOUTME: Section rendering for the termconf application
// ABOUTME: Converts each Markdown section to HTML through an external converter

use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::{Result, SiteError};
use crate::sections::SectionMap;

/// Something that turns a Markdown snippet into an HTML fragment
pub trait Converter {
    fn to_html(&self, markdown: &str) -> Result<String>;
}

/// Runs `pandoc <file> -f markdown -t html` from the site root on a staged
/// copy of the input, so relative links and images resolve against the root
pub struct PandocConverter {
    program: String,
    root: PathBuf,
}

impl PandocConverter {
    pub fn new(program: impl Into<String>, root: &Path) -> Self {
        Self {
            program: program.into(),
            root: root.to_path_buf(),
        }
    }

    fn run(&self, input_name: &str) -> Result<String> {
        // Resolve before switching directories; a relative program path would
        // otherwise be looked up from the root.
        let program = which::which(&self.program).map_err(|e| SiteError::ConversionError {
            message: format!("{} not found: {}", self.program, e),
        })?;

        let output = Command::new(&program)
            .current_dir(&self.root)
            .arg(input_name)
            .args(["-f", "markdown", "-t", "html"])
            .output()
            .map_err(|e| SiteError::ConversionError {
                message: format!("failed to run {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            return Err(SiteError::ConversionError {
                message: format!(
                    "{} exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Converter for PandocConverter {
    fn to_html(&self, markdown: &str) -> Result<String> {
        let name = staging_name("md");
        let staged = self.root.join(&name);
        fs::write(&staged, markdown)?;
        let result = self.run(&name);
        remove_staged(&staged);
        result
    }
}

/// A unique scratch file name
pub(crate) fn staging_name(extension: &str) -> String {
    format!(".termconf-{}.{}", uuid::Uuid::new_v4(), extension)
}

/// Best-effort removal; a file that is already gone is fine.
pub(crate) fn remove_staged(path: &Path) {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            debug!("Failed to remove staging file {:?}: {}", path, e);
        }
    }
}

/// Paragraph-wrapped raw Markdown with only `<` and `>` escaped
pub fn fallback_html(markdown: &str) -> String {
    format!("<p>{}</p>", markdown.replace('<', "&lt;").replace('>', "&gt;"))
}

/// Convert every section, substituting [`fallback_html`] for any failure
pub fn render_sections(sections: &SectionMap, converter: &dyn Converter) -> SectionMap {
    let mut rendered = SectionMap::new();

    for (key, markdown) in sections.iter() {
        let html = match converter.to_html(markdown) {
            Ok(html) => {
                info!("✓ Converted section: {}", key);
                html
            }
            Err(e) => {
                error!("✗ Error converting section {}: {}", key, e);
                fallback_html(markdown)
            }
        };
        rendered.insert(key.to_string(), html);
    }

    rendered
}
