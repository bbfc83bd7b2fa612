//! Platform-variant naming patterns used by regex assembly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::presence::null_as_default;

/// Target platform of a [`Pattern`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Unix, Platform::Windows];

    /// Platform of the compilation target.
    pub fn current() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Unix }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Unix => "unix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unix" => Ok(Platform::Unix),
            "windows" => Ok(Platform::Windows),
            other => Err(format!("Invalid platform '{other}': must be one of unix, windows")),
        }
    }
}

/// A naming convention expressed once per platform.
///
/// Both variants are always strings; an unspecified variant is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default, deserialize_with = "null_as_default")]
    pub unix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub windows: String,
}

impl Pattern {
    pub fn new(unix: impl Into<String>, windows: impl Into<String>) -> Self {
        Self { unix: unix.into(), windows: windows.into() }
    }

    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Unix => &self.unix,
            Platform::Windows => &self.windows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unix.is_empty() && self.windows.is_empty()
    }
}

/// Fixed set of named patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Patterns {
    /// Marker replaced by the anti-evasion character class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub anti_evasion: Pattern,
    /// Marker for anti-evasion sequences that must be followed by whitespace.
    #[serde(default, deserialize_with = "null_as_default")]
    pub anti_evasion_suffix: Pattern,
    /// Marker for anti-evasion sequences that must not be followed by whitespace.
    #[serde(default, deserialize_with = "null_as_default")]
    pub anti_evasion_no_space_suffix: Pattern,
}

impl Patterns {
    pub const ANTI_EVASION: &'static str = "anti-evasion";
    pub const ANTI_EVASION_SUFFIX: &'static str = "anti-evasion-suffix";
    pub const ANTI_EVASION_NO_SPACE_SUFFIX: &'static str = "anti-evasion-no-space-suffix";

    /// Every pattern with its document key, in document order.
    pub fn entries(&self) -> [(&'static str, &Pattern); 3] {
        [
            (Self::ANTI_EVASION, &self.anti_evasion),
            (Self::ANTI_EVASION_SUFFIX, &self.anti_evasion_suffix),
            (Self::ANTI_EVASION_NO_SPACE_SUFFIX, &self.anti_evasion_no_space_suffix),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("unix".parse::<Platform>(), Ok(Platform::Unix));
        assert_eq!("Windows".parse::<Platform>(), Ok(Platform::Windows));
        assert!("macos".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_display_matches_document_keys() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn pattern_selects_variant_by_platform() {
        let pattern = Pattern::new("_av-u_", "_av-w_");
        assert_eq!(pattern.for_platform(Platform::Unix), "_av-u_");
        assert_eq!(pattern.for_platform(Platform::Windows), "_av-w_");
        assert!(!pattern.is_empty());
        assert!(Pattern::default().is_empty());
    }

    #[test]
    fn missing_variant_defaults_to_empty() {
        let pattern: Pattern = serde_yaml::from_str("unix: _av-u_\n").unwrap();
        assert_eq!(pattern, Pattern::new("_av-u_", ""));
    }

    #[test]
    fn patterns_decode_from_kebab_case_keys() {
        let yaml = r#"
anti-evasion:
  unix: _av-u_
  windows: _av-w_
anti-evasion-no-space-suffix:
  unix: _av-ns-u-suffix_
"#;
        let patterns: Patterns = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(patterns.anti_evasion, Pattern::new("_av-u_", "_av-w_"));
        assert!(patterns.anti_evasion_suffix.is_empty());
        assert_eq!(patterns.anti_evasion_no_space_suffix.unix, "_av-ns-u-suffix_");
        assert_eq!(patterns.anti_evasion_no_space_suffix.windows, "");
    }

    #[test]
    fn null_pattern_is_empty() {
        let patterns: Patterns = serde_yaml::from_str("anti-evasion:\n").unwrap();
        assert!(patterns.anti_evasion.is_empty());
    }

    #[test]
    fn entries_follow_document_order() {
        let keys: Vec<&str> = Patterns::default().entries().iter().map(|(key, _)| *key).collect();
        assert_eq!(
            keys,
            vec!["anti-evasion", "anti-evasion-suffix", "anti-evasion-no-space-suffix"]
        );
    }
}
