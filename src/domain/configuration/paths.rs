use std::path::{Path, PathBuf};

/// Conventional configuration file name.
pub const DEFAULT_FILE_NAME: &str = "toolchain.yaml";

/// Directory, relative to the rule-set root, that holds the configuration file.
pub const ASSEMBLY_DIR: &str = "regex-assembly";

/// `<directory>/<file_name>`, joined without further normalisation.
pub fn configuration_path(directory: &Path, file_name: &str) -> PathBuf {
    directory.join(file_name)
}

/// `<root>/regex-assembly`.
pub fn assembly_dir(root: &Path) -> PathBuf {
    root.join(ASSEMBLY_DIR)
}
