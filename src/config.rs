// ABOUTME: Configuration module for the termconf application
// ABOUTME: Provides build settings, fixed artifact paths and environment variable handling

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::SiteError;

pub const CONFIG_FILE: &str = "config.yml";
pub const EXAMPLE_CONFIG_FILE: &str = "example-config.yml";
pub const CONTENT_FILE: &str = "content.md";
pub const EXAMPLE_CONTENT_FILE: &str = "example-content.md";
pub const SECTIONS_FILE: &str = "sections.json";
pub const CONFIG_SCRIPT_FILE: &str = "config.js";
pub const INDEX_FILE: &str = "index.html";
pub const PRINT_FILE: &str = "print.html";
pub const PDF_FILE: &str = "program.pdf";

const DEFAULT_PANDOC: &str = "pandoc";
const DEFAULT_PDF_ENGINE: &str = "xelatex";

/// Where the static stylesheets and scripts live relative to the generated pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Assets sit next to the generated files (`css/`, `js/`).
    #[default]
    Flat,
    /// Assets sit in a `template/` subdirectory; generated files stay at the root.
    Template,
}

impl Layout {
    fn asset_prefix(&self) -> &'static str {
        match self {
            Layout::Flat => "",
            Layout::Template => "template/",
        }
    }

    pub fn style_href(&self) -> String {
        format!("{}css/style.css", self.asset_prefix())
    }

    pub fn print_style_href(&self) -> String {
        format!("{}css/print.css", self.asset_prefix())
    }

    pub fn app_script_src(&self) -> String {
        format!("{}js/app.js", self.asset_prefix())
    }

    /// The generated client config script always lives at the root.
    pub fn config_script_src(&self) -> &'static str {
        CONFIG_SCRIPT_FILE
    }
}

impl FromStr for Layout {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Layout::Flat),
            "template" => Ok(Layout::Template),
            other => Err(SiteError::ValidationError(format!(
                "Unknown layout: {} (expected 'flat' or 'template')",
                other
            ))),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Flat => write!(f, "flat"),
            Layout::Template => write!(f, "template"),
        }
    }
}

/// Settings for a single build run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub root: PathBuf,
    pub layout: Layout,
    pub pandoc_path: String,
    pub pdf_engine: String,
    pub generate_pdf: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            layout: Layout::Flat,
            pandoc_path: DEFAULT_PANDOC.to_string(),
            pdf_engine: DEFAULT_PDF_ENGINE.to_string(),
            generate_pdf: true,
        }
    }
}

impl BuildConfig {
    /// Create a new configuration instance
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let pandoc_path =
            env::var("TERMCONF_PANDOC").unwrap_or_else(|_| DEFAULT_PANDOC.to_string());
        let pdf_engine =
            env::var("TERMCONF_PDF_ENGINE").unwrap_or_else(|_| DEFAULT_PDF_ENGINE.to_string());
        let generate_pdf = env::var("TERMCONF_SKIP_PDF")
            .ok()
            .map(|s| s.to_lowercase() != "true")
            .unwrap_or(true);

        Self {
            pandoc_path,
            pdf_engine,
            generate_pdf,
            ..Self::default()
        }
    }

    pub fn paths(&self) -> OutputPaths {
        OutputPaths::new(&self.root)
    }
}

/// Every file the pipeline reads or writes, resolved against the site root
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub config: PathBuf,
    pub example_config: PathBuf,
    pub content: PathBuf,
    pub example_content: PathBuf,
    pub sections: PathBuf,
    pub config_script: PathBuf,
    pub index: PathBuf,
    pub print: PathBuf,
    pub pdf: PathBuf,
}

impl OutputPaths {
    pub fn new(root: &Path) -> Self {
        Self {
            config: root.join(CONFIG_FILE),
            example_config: root.join(EXAMPLE_CONFIG_FILE),
            content: root.join(CONTENT_FILE),
            example_content: root.join(EXAMPLE_CONTENT_FILE),
            sections: root.join(SECTIONS_FILE),
            config_script: root.join(CONFIG_SCRIPT_FILE),
            index: root.join(INDEX_FILE),
            print: root.join(PRINT_FILE),
            pdf: root.join(PDF_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        assert_eq!(Layout::Flat.style_href(), "css/style.css");
        assert_eq!(Layout::Flat.app_script_src(), "js/app.js");
        assert_eq!(Layout::Template.style_href(), "template/css/style.css");
        assert_eq!(Layout::Template.print_style_href(), "template/css/print.css");
        assert_eq!(Layout::Template.app_script_src(), "template/js/app.js");
        assert_eq!(Layout::Template.config_script_src(), "config.js");
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Template".parse::<Layout>().unwrap(), Layout::Template);
        assert_eq!("flat".parse::<Layout>().unwrap(), Layout::Flat);
        assert!("nested".parse::<Layout>().is_err());
    }

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::new(Path::new("/site"));
        assert_eq!(paths.config, PathBuf::from("/site/config.yml"));
        assert_eq!(paths.example_content, PathBuf::from("/site/example-content.md"));
        assert_eq!(paths.pdf, PathBuf::from("/site/program.pdf"));
    }
}
