use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::DocumentFormat;

/// Failure while loading or rendering a toolchain configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file is missing or could not be read.
    #[error("Failed to open configuration file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a well-formed configuration document.
    #[error("Failed to decode configuration file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration could not be encoded.
    #[error("Failed to encode configuration as {format}: {details}")]
    Encode { format: DocumentFormat, details: String },
}

impl ConfigError {
    /// Path of the configuration file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Open { path, .. } | ConfigError::Decode { path, .. } => Some(path),
            ConfigError::Encode { .. } => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            ConfigError::Open { source, .. } => source.kind(),
            ConfigError::Decode { .. } => io::ErrorKind::InvalidData,
            ConfigError::Encode { .. } => io::ErrorKind::InvalidInput,
        }
    }
}
