use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG_YAML: &str = r#"conference:
  title: "Terminal Conf"
  subtitle: "Hello & Welcome"
  date: "May 2025"
  location: "Online"
site:
  description: "A test conference"
  author: "Test Team"
sections:
  - id: schedule
    icon: ">"
    label: "Schedule"
themes:
  - id: green
    name: "Green"
terminal:
  username: visitor
  hostname: termconf
ascii_art: "<<TC>>"
"#;

const CONTENT_MD: &str = "Preamble\n## Schedule\n* Opening\n## Help\nA section named help\n";

fn run_command(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termconf"))
        .args(args)
        .arg("--root")
        .arg(root)
        .env("TERMCONF_PANDOC", "termconf-test-missing-pandoc")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_build_command_without_converter() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("config.yml"), CONFIG_YAML).expect("Failed to write config");
    fs::write(root.join("content.md"), CONTENT_MD).expect("Failed to write content");

    let output = run_command(root, &["build"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let index = fs::read_to_string(root.join("index.html")).expect("index.html missing");
    assert!(index.contains("&lt;&lt;TC&gt;&gt;"), "banner should be escaped");
    assert!(index.contains("<title>Terminal Conf - Hello & Welcome</title>"));

    let sections = fs::read_to_string(root.join("sections.json")).expect("sections.json missing");
    let sections: serde_json::Value = serde_json::from_str(&sections).unwrap();
    assert_eq!(sections["schedule"], "<p>* Opening</p>");
    assert_eq!(sections["help"], "<p>A section named help\n</p>");
    assert!(sections.get("preamble").is_none());

    let script = fs::read_to_string(root.join("config.js")).expect("config.js missing");
    assert!(script.contains("window.CONFERENCE_CONFIG = {"));

    assert!(root.join("print.html").exists());
    assert!(!root.join("program.pdf").exists());
}

#[test]
fn test_default_command_is_build() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("config.yml"), CONFIG_YAML).expect("Failed to write config");
    fs::write(root.join("content.md"), CONTENT_MD).expect("Failed to write content");

    let output = run_command(root, &["--no-pdf"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(root.join("index.html").exists());
}

#[test]
fn test_missing_inputs_exit_non_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let output = run_command(root, &["build"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);

    let entries = fs::read_dir(root).unwrap().count();
    assert_eq!(entries, 0, "no artifacts should be written");
}

#[test]
fn test_example_inputs_seed_primary_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("example-config.yml"), CONFIG_YAML).expect("Failed to write config");
    fs::write(root.join("example-content.md"), CONTENT_MD).expect("Failed to write content");

    let output = run_command(root, &["build", "--layout", "template"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    assert_eq!(fs::read(root.join("config.yml")).unwrap(), CONFIG_YAML.as_bytes());
    assert_eq!(fs::read(root.join("content.md")).unwrap(), CONTENT_MD.as_bytes());

    let index = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(index.contains("template/css/style.css"));
}

#[test]
fn test_bundled_examples_build() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    fs::copy(manifest.join("example-config.yml"), root.join("example-config.yml")).unwrap();
    fs::copy(manifest.join("example-content.md"), root.join("example-content.md")).unwrap();

    let output = run_command(root, &["build", "--no-pdf"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let sections = fs::read_to_string(root.join("sections.json")).unwrap();
    let sections: serde_json::Value = serde_json::from_str(&sections).unwrap();
    assert!(sections.get("schedule").is_some());
    assert!(sections.get("speakers").is_some());
}
