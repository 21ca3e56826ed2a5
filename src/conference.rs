// ABOUTME: Conference configuration record for the termconf application
// ABOUTME: Typed view over the YAML config plus the raw tree exposed to client code

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::errors::Result;
use crate::utils::format_date_range;

const SOURCE_URL_PLACEHOLDER: &str = "https://example.com";

/// Text form of a YAML value as it lands in the page: null is empty,
/// numbers and booleans print as written.
fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        Value::Tagged(tagged) => value_text(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(value_text(other)),
    })
}

/// A blank key (`sections:`) reads as the default instead of failing.
fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Conference {
    #[serde(deserialize_with = "as_text")]
    pub title: String,
    #[serde(deserialize_with = "as_text")]
    pub subtitle: String,
    #[serde(deserialize_with = "as_text")]
    pub date: String,
    #[serde(deserialize_with = "as_text")]
    pub location: String,
    #[serde(deserialize_with = "optional_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub repository: Option<String>,
}

impl Conference {
    /// Formatted `start_date`/`end_date`, or the free-form `date` field
    pub fn date_range(&self) -> String {
        format_date_range(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            &self.date,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    #[serde(deserialize_with = "as_text")]
    pub description: String,
    #[serde(deserialize_with = "as_text")]
    pub author: String,
    #[serde(deserialize_with = "optional_text")]
    pub url: Option<String>,
}

/// A navigation entry; `id` doubles as the terminal command name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavSection {
    #[serde(deserialize_with = "as_text")]
    pub id: String,
    #[serde(deserialize_with = "as_text")]
    pub icon: String,
    #[serde(deserialize_with = "as_text")]
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "as_text")]
    pub id: String,
    #[serde(deserialize_with = "as_text")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Terminal {
    #[serde(deserialize_with = "as_text")]
    pub username: String,
    #[serde(deserialize_with = "as_text")]
    pub hostname: String,
}

/// Parsed site configuration.
///
/// Built once per run and only read afterwards. The untouched YAML tree is
/// kept alongside the typed fields so `config.js` carries every key the
/// author wrote, in the order they wrote it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConferenceConfig {
    #[serde(deserialize_with = "or_default")]
    pub conference: Conference,
    #[serde(deserialize_with = "or_default")]
    pub site: SiteMeta,
    #[serde(deserialize_with = "or_default")]
    pub sections: Vec<NavSection>,
    #[serde(deserialize_with = "or_default")]
    pub themes: Vec<Theme>,
    #[serde(deserialize_with = "or_default")]
    pub terminal: Terminal,
    #[serde(deserialize_with = "optional_text")]
    pub ascii_art: Option<String>,
    #[serde(skip)]
    raw: Value,
}

impl ConferenceConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let raw: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(text)?
        };
        // An empty document is null; treat it as an empty mapping.
        let mut config: ConferenceConfig = if raw.is_null() {
            ConferenceConfig::default()
        } else {
            serde_yaml::from_value(raw.clone())?
        };
        config.raw = raw;
        Ok(config)
    }

    /// The configuration tree exactly as parsed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Display label for a section key, falling back to the key itself.
    pub fn section_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.sections
            .iter()
            .find(|s| s.id == key)
            .map(|s| s.label.as_str())
            .unwrap_or(key)
    }

    /// The URL printed in footers.
    pub fn source_url(&self) -> &str {
        [
            self.conference.website.as_deref(),
            self.conference.repository.as_deref(),
            self.site.url.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|u| !u.trim().is_empty())
        .unwrap_or(SOURCE_URL_PLACEHOLDER)
    }
}
