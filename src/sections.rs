// ABOUTME: Content sectioning for the termconf application
// ABOUTME: Splits a Markdown document into an ordered map keyed by level-2 headings

use indexmap::IndexMap;
use serde::Serialize;

const HEADING_MARKER: &str = "## ";

/// Ordered key/value map.
///
/// Re-inserting an existing key replaces its value but keeps its original
/// position, matching how the JSON artifact orders keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionMap {
    entries: IndexMap<String, String>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

enum State {
    /// Still in the preamble; lines are dropped.
    Preamble,
    Open { key: String, lines: Vec<String> },
}

/// Normalized section key for a heading's trailing text
pub fn section_key(heading_text: &str) -> String {
    heading_text.trim().to_lowercase()
}

/// Split Markdown into sections at every line starting with `## `.
///
/// Text before the first heading is discarded. A repeated key keeps only
/// the content of its last occurrence.
pub fn split_sections(markdown: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut state = State::Preamble;

    // `split('\n')` rather than `lines()` so trailing blank lines and `\r` survive.
    for line in markdown.split('\n') {
        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            if let State::Open { key, lines } = state {
                sections.insert(key, lines.join("\n"));
            }
            state = State::Open {
                key: section_key(heading),
                lines: Vec::new(),
            };
        } else if let State::Open { lines, .. } = &mut state {
            lines.push(line.to_string());
        }
    }

    if let State::Open { key, lines } = state {
        sections.insert(key, lines.join("\n"));
    }

    sections
}
