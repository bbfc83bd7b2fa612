//! Toolchain configuration loading.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::configuration::{
    DEFAULT_FILE_NAME, assembly_dir, configuration_path, parse_configuration,
};
use crate::domain::{ConfigError, Configuration};
use crate::ports::ConfigurationSource;
use crate::services::FilesystemConfigurationSource;

/// Load `<directory>/<file_name>` from `source` and decode it.
///
/// Makes exactly one read. Nothing is retried and nothing falls back to
/// defaults: an unreadable file is [`ConfigError::Open`], an undecodable one
/// is [`ConfigError::Decode`].
pub fn load_configuration(
    source: &(impl ConfigurationSource + ?Sized),
    directory: &Path,
    file_name: &str,
) -> Result<Configuration, ConfigError> {
    let path = configuration_path(directory, file_name);
    debug!(path = %path.display(), "loading toolchain configuration");

    let content = match source.read_document(&path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot open toolchain configuration");
            return Err(ConfigError::Open { path, source: err });
        }
    };

    let config = match parse_configuration(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "cannot decode toolchain configuration");
            return Err(ConfigError::Decode { path, source: err });
        }
    };

    debug!(
        path = %path.display(),
        commit_ref_set = config.sources.english_dictionary.was_commit_ref_set(),
        "loaded toolchain configuration"
    );
    Ok(config)
}

impl Configuration {
    /// Load `<directory>/<file_name>` from the filesystem.
    pub fn load(directory: impl AsRef<Path>, file_name: &str) -> Result<Self, ConfigError> {
        load_configuration(&FilesystemConfigurationSource::new(), directory.as_ref(), file_name)
    }

    /// Load `<root>/regex-assembly/toolchain.yaml` from the filesystem.
    pub fn load_default(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(assembly_dir(root.as_ref()), DEFAULT_FILE_NAME)
    }
}
