//! Shared fixtures for toolchain-config integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use toolchain_config::{Configuration, EnglishDictionary, Pattern, Patterns, Sources};

/// The configuration every scenario starts from.
#[allow(dead_code)]
pub fn sample_configuration() -> Configuration {
    Configuration {
        sources: Sources {
            english_dictionary: EnglishDictionary::with_commit_ref("refs/heads/master"),
        },
        patterns: Patterns {
            anti_evasion: Pattern::new("_av-u_", "_av-w_"),
            anti_evasion_suffix: Pattern::new("_av-u-suffix_", "_av-w-suffix_"),
            anti_evasion_no_space_suffix: Pattern::new("_av-ns-u-suffix_", "_av-ns-w-suffix_"),
        },
    }
}

/// Temporary rule-set root with a `regex-assembly/` directory.
#[allow(dead_code)]
pub struct RuleSet {
    root: TempDir,
}

#[allow(dead_code)]
impl RuleSet {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("regex-assembly"))
            .expect("Failed to create regex-assembly directory");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn assembly_dir(&self) -> PathBuf {
        self.root.path().join("regex-assembly")
    }

    /// Write raw text to `regex-assembly/<file_name>`.
    pub fn write(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.assembly_dir().join(file_name);
        fs::write(&path, content).expect("Failed to write configuration file");
        path
    }

    /// Encode `config` and write it to `regex-assembly/<file_name>`.
    pub fn write_config(&self, file_name: &str, config: &Configuration) -> PathBuf {
        let yaml = config.to_yaml().expect("Failed to encode configuration");
        self.write(file_name, &yaml)
    }
}
