//! Root toolchain configuration model.

use serde::{Deserialize, Serialize};

use super::english_dictionary::EnglishDictionary;
use super::patterns::Patterns;
use super::presence::null_as_default;

/// Configuration loaded from `regex-assembly/toolchain.yaml`.
///
/// Unknown keys are ignored and missing sections resolve to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Upstream data sources.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Sources,
    /// Named regex-assembly patterns.
    #[serde(default, deserialize_with = "null_as_default")]
    pub patterns: Patterns,
}

/// Descriptors for upstream data sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sources {
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_dictionary: EnglishDictionary,
}
