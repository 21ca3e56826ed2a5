// ABOUTME: PDF generation module for the termconf application
// ABOUTME: Typesets the whole content document with pandoc and a LaTeX engine

use log::info;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::conference::ConferenceConfig;
use crate::config::BuildConfig;
use crate::convert::{remove_staged, staging_name};
use crate::errors::{Result, SiteError};
use crate::utils::escape_latex;

pub const PDF_REMEDIATION: &str =
    "install pandoc and a LaTeX engine such as xelatex, or pass --no-pdf";

/// The footer text, already escaped for LaTeX
pub fn footer_line(config: &ConferenceConfig, generated_on: &str) -> String {
    [
        config.conference.title.as_str(),
        config.conference.date_range().as_str(),
        format!("Generated {}", generated_on).as_str(),
        config.source_url(),
    ]
    .iter()
    .map(|part| escape_latex(part))
    .collect::<Vec<_>>()
    .join(r" \textbullet{} ")
}

/// Header-include snippet installing the footer on every page
pub fn footer_macro(footer: &str) -> String {
    format!(
        r"\usepackage{{fancyhdr}}
\pagestyle{{fancy}}
\fancyhf{{}}
\renewcommand{{\headrulewidth}}{{0pt}}
\fancyfoot[C]{{\footnotesize {footer}}}
\fancyfoot[R]{{\footnotesize \thepage}}
\fancypagestyle{{plain}}{{\fancyhf{{}}\fancyfoot[C]{{\footnotesize {footer}}}\fancyfoot[R]{{\footnotesize \thepage}}}}
",
        footer = footer
    )
}

fn locate(tool: &str) -> Result<PathBuf> {
    which::which(tool).map_err(|e| SiteError::ToolNotFound(format!("{}: {}", tool, e)))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Typeset `content` into `output`.
///
/// pandoc runs from the site root so relative image paths in the content
/// resolve the same way they do for the HTML pages.
///
/// Nothing is cleaned up on failure except the staged footer file; whatever
/// pandoc itself leaves behind stays.
pub fn generate_pdf(
    build: &BuildConfig,
    config: &ConferenceConfig,
    content: &Path,
    output: &Path,
    generated_on: &str,
) -> Result<PathBuf> {
    let pandoc = locate(&build.pandoc_path)?;
    let engine = locate(&build.pdf_engine)?;

    info!("Generating PDF from {:?}", content);

    let root = absolute(&build.root)?;
    let header = root.join(staging_name("tex"));
    fs::write(&header, footer_macro(&footer_line(config, generated_on)))?;

    let result = Command::new(&pandoc)
        .current_dir(&root)
        .arg(absolute(content)?)
        .arg("-o")
        .arg(absolute(output)?)
        .arg(format!("--pdf-engine={}", engine.display()))
        .args(["-V", "geometry:margin=2cm"])
        .args(["-V", "colorlinks=true"])
        .args(["-V", "linkcolor=blue"])
        .args(["-V", "urlcolor=blue"])
        .arg("-M")
        .arg(format!("title={}", config.conference.title))
        .arg("-M")
        .arg(format!("date={}", config.conference.date_range()))
        .arg("-H")
        .arg(&header)
        .output();

    remove_staged(&header);

    let result =
        result.map_err(|e| SiteError::PdfError(format!("failed to run pandoc: {}", e)))?;
    if !result.status.success() {
        return Err(SiteError::PdfError(format!(
            "pandoc exited with {}: {}",
            result.status,
            String::from_utf8_lossy(&result.stderr).trim()
        )));
    }

    info!("✓ Generated {:?}", output.file_name().unwrap_or_default());
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> ConferenceConfig {
        ConferenceConfig::from_yaml(
            r#"
conference:
  title: "R&D_Summit"
  date: "June 2025"
  website: "https://conf.example/a_b"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_footer_line_is_escaped() {
        let footer = footer_line(&sample_config(), "01-06-2025");
        assert!(footer.starts_with(r"R\&D\_Summit \textbullet{} June 2025"));
        assert!(footer.contains("Generated 01-06-2025"));
        assert!(footer.ends_with(r"https://conf.example/a\_b"));
    }

    #[test]
    fn test_footer_macro_uses_fancyhdr() {
        let tex = footer_macro("X");
        assert!(tex.contains(r"\usepackage{fancyhdr}"));
        assert!(tex.contains(r"\fancyfoot[C]{\footnotesize X}"));
    }

    #[test]
    fn test_missing_tool_is_reported() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut build = BuildConfig::new(dir.path());
        build.pandoc_path = "termconf-no-such-pandoc".to_string();

        let content = dir.path().join("content.md");
        fs::write(&content, "## A\nb").unwrap();
        let output = dir.path().join("program.pdf");

        let result = generate_pdf(&build, &sample_config(), &content, &output, "01-01-2025");
        assert!(matches!(result, Err(SiteError::ToolNotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_pandoc_runs_from_site_root() {
        use std::os::unix::fs::PermissionsExt;

        let tools = TempDir::new().expect("Failed to create temp dir");
        let site = TempDir::new().expect("Failed to create temp dir");
        // Arguments are `<content> -o <output> ...`; record the working directory as the "PDF".
        let script = |name: &str, body: &str| {
            let path = tools.path().join(name);
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        };

        let mut build = BuildConfig::new(site.path());
        build.pandoc_path = script("fake-pandoc", r#"pwd > "$3""#);
        build.pdf_engine = script("fake-engine", "exit 0");

        let content = site.path().join("content.md");
        fs::write(&content, "## A\n![logo](img/logo.png)").unwrap();
        let output = site.path().join("program.pdf");

        let written =
            generate_pdf(&build, &sample_config(), &content, &output, "01-01-2025").unwrap();
        assert_eq!(written, output);

        let recorded = fs::read_to_string(&output).unwrap();
        assert_eq!(
            fs::canonicalize(recorded.trim()).unwrap(),
            fs::canonicalize(site.path()).unwrap()
        );

        let staged = fs::read_dir(site.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(".termconf-"))
            .count();
        assert_eq!(staged, 0, "footer include should be removed");
    }
}
