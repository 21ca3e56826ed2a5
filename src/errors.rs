// ABOUTME: Error types for the termconf application
// ABOUTME: Provides structured error handling for each stage of the build pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{kind} not found at {primary:?} and no fallback available at {fallback:?}")]
    MissingInput {
        kind: &'static str,
        primary: PathBuf,
        fallback: PathBuf,
    },

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Markdown conversion error: {message}")]
    ConversionError { message: String },

    #[error("PDF generation error: {0}")]
    PdfError(String),

    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_names_both_locations() {
        let err = SiteError::MissingInput {
            kind: "config",
            primary: PathBuf::from("site/config.yml"),
            fallback: PathBuf::from("site/example-config.yml"),
        };
        let message = err.to_string();
        assert!(message.starts_with("config not found at"));
        assert!(message.contains("site/config.yml"));
        assert!(message.contains("site/example-config.yml"));
    }

    #[test]
    fn test_io_errors_convert_to_read_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(SiteError::from(io), SiteError::FileReadError(_)));
    }
}
