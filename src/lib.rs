//! toolchain-config: load the `toolchain.yaml` configuration consumed by
//! regex-assembly tooling.
//!
//! The configuration lives at `<rules>/regex-assembly/toolchain.yaml`:
//!
//! ```yaml
//! sources:
//!   english-dictionary:
//!     commit-ref: refs/heads/master
//! patterns:
//!   anti-evasion:
//!     unix: _av-u_
//!     windows: _av-w_
//! ```
//!
//! Loading is a single read-and-decode; see [`load`].

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use app::load_configuration;
pub use domain::configuration::{
    ASSEMBLY_DIR, DEFAULT_FILE_NAME, parse_configuration, render_configuration,
};
pub use domain::{
    ConfigError, Configuration, DocumentFormat, EnglishDictionary, Pattern, Patterns, Platform,
    Presence, Sources,
};
pub use ports::ConfigurationSource;
pub use services::FilesystemConfigurationSource;

/// Load the configuration file `file_name` inside `directory`.
///
/// Fails with [`ConfigError::Open`] when the file cannot be opened or read and
/// with [`ConfigError::Decode`] when its contents are not a valid
/// configuration document.
pub fn load(directory: impl AsRef<Path>, file_name: &str) -> Result<Configuration, ConfigError> {
    Configuration::load(directory, file_name)
}

/// Load `<root>/regex-assembly/toolchain.yaml`.
pub fn load_default(root: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    Configuration::load_default(root)
}
