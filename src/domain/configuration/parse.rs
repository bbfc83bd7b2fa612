//! Pure decode/encode for toolchain configuration documents.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::Error as _;

use crate::domain::{ConfigError, Configuration};

/// Output encoding for [`render_configuration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            other => Err(format!("Invalid format '{other}': must be one of yaml, json")),
        }
    }
}

/// Decode a YAML stream into a [`Configuration`].
///
/// A stream without documents (empty, or comments only) and a null document
/// both yield the default configuration. More than one document is an error.
pub fn parse_configuration(content: &[u8]) -> Result<Configuration, serde_yaml::Error> {
    let mut documents = serde_yaml::Deserializer::from_slice(content);
    let Some(document) = documents.next() else {
        return Ok(Configuration::default());
    };
    let config = Option::<Configuration>::deserialize(document)?;
    if documents.next().is_some() {
        return Err(serde_yaml::Error::custom("expected a single YAML document"));
    }
    Ok(config.unwrap_or_default())
}

/// Encode a [`Configuration`] in the requested format.
pub fn render_configuration(
    config: &Configuration,
    format: DocumentFormat,
) -> Result<String, ConfigError> {
    let rendered = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
    };
    rendered.map_err(|details| ConfigError::Encode { format, details })
}

impl Configuration {
    /// Decode from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        parse_configuration(content.as_bytes())
    }

    /// Encode as YAML text.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        render_configuration(self, DocumentFormat::Yaml)
    }
}
