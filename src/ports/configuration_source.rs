//! Read access to configuration documents.

use std::io;
use std::path::Path;

/// Port for fetching the raw bytes of a configuration document.
///
/// One call is one complete read. Implementations must not keep handles or
/// cached content alive between calls.
pub trait ConfigurationSource {
    /// Read the whole document at `path`.
    fn read_document(&self, path: &Path) -> io::Result<Vec<u8>>;
}
