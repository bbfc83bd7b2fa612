//! In-memory configuration source double.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::ConfigurationSource;

/// Serves documents from memory and records every path it was asked for.
#[derive(Debug, Default)]
pub struct MemoryConfigurationSource {
    documents: HashMap<PathBuf, Vec<u8>>,
    failure: Option<io::ErrorKind>,
    reads: Mutex<Vec<PathBuf>>,
}

impl MemoryConfigurationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document at `path`.
    pub fn with_document(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.documents.insert(path.into(), content.as_bytes().to_vec());
        self
    }

    /// Fail every read with `kind`, as if the file existed but could not be opened.
    pub fn failing_with(mut self, kind: io::ErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl ConfigurationSource for MemoryConfigurationSource {
    fn read_document(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.lock().unwrap().push(path.to_path_buf());

        if let Some(kind) = self.failure {
            return Err(io::Error::from(kind));
        }
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "document not seeded"))
    }
}
