use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::ports::ConfigurationSource;

/// Filesystem-backed configuration source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemConfigurationSource;

impl FilesystemConfigurationSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigurationSource for FilesystemConfigurationSource {
    fn read_document(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        if !file.metadata()?.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toolchain.yaml");
        fs::write(&path, "patterns: {}\n").unwrap();

        let content = FilesystemConfigurationSource::new().read_document(&path).unwrap();
        assert_eq!(content, b"patterns: {}\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = FilesystemConfigurationSource::new()
            .read_document(&dir.path().join("toolchain.yaml"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempdir().unwrap();
        let result = FilesystemConfigurationSource::new().read_document(dir.path());
        assert!(result.is_err());
    }
}
