// ABOUTME: Utility functions for the termconf application
// ABOUTME: Provides escaping, date formatting and file writing helpers

use chrono::{Datelike, Local, NaiveDate};
use log::info;
use std::fs;
use std::path::Path;

use crate::errors::{Result, SiteError};

/// Full HTML entity escaping for text embedded in markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape LaTeX special characters so text can sit inside a macro argument
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Human-readable date range, or `fallback` when the dates are absent or unparseable
pub fn format_date_range(start: Option<&str>, end: Option<&str>, fallback: &str) -> String {
    let Some(start) = start.and_then(parse_date) else {
        return fallback.to_string();
    };
    let end = match end.and_then(parse_date) {
        Some(end) if end > start => end,
        _ => return start.format("%B %-d, %Y").to_string(),
    };

    if start.year() != end.year() {
        format!(
            "{} - {}",
            start.format("%B %-d, %Y"),
            end.format("%B %-d, %Y")
        )
    } else if start.month() != end.month() {
        format!(
            "{} - {}, {}",
            start.format("%B %-d"),
            end.format("%B %-d"),
            start.year()
        )
    } else {
        format!("{}-{}, {}", start.format("%B %-d"), end.day(), start.year())
    }
}

/// Today's date in day-month-year form
pub fn generation_date() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(SiteError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Write an artifact, creating its parent directory first
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory_exists(parent)?;
        }
    }
    fs::write(path, contents)?;
    info!("✓ Generated {:?}", path.file_name().unwrap_or_default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_escape_latex() {
        assert_eq!(escape_latex("R&D_2025"), r"R\&D\_2025");
        assert_eq!(escape_latex("100% #1 $5"), r"100\% \#1 \$5");
        assert_eq!(escape_latex("a~b^c"), r"a\textasciitilde{}b\textasciicircum{}c");
        assert_eq!(escape_latex(r"{x}\y"), r"\{x\}\textbackslash{}y");
    }

    #[test]
    fn test_date_range_same_month() {
        assert_eq!(
            format_date_range(Some("2025-03-03"), Some("2025-03-05"), ""),
            "March 3-5, 2025"
        );
    }

    #[test]
    fn test_date_range_across_months_and_years() {
        assert_eq!(
            format_date_range(Some("2025-03-30"), Some("2025-04-02"), ""),
            "March 30 - April 2, 2025"
        );
        assert_eq!(
            format_date_range(Some("2025-12-30"), Some("2026-01-02"), ""),
            "December 30, 2025 - January 2, 2026"
        );
    }

    #[test]
    fn test_date_range_single_day_and_fallback() {
        assert_eq!(
            format_date_range(Some("2025-06-01"), None, "ignored"),
            "June 1, 2025"
        );
        assert_eq!(
            format_date_range(Some("2025-06-01"), Some("2025-06-01"), ""),
            "June 1, 2025"
        );
        assert_eq!(format_date_range(None, None, "Spring 2025"), "Spring 2025");
        assert_eq!(
            format_date_range(Some("sometime"), Some("2025-06-01"), "TBD"),
            "TBD"
        );
    }

    #[test]
    fn test_generation_date_shape() {
        let date = generation_date();
        let parts: Vec<&str> = date.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }
}
