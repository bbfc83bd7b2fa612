pub mod configuration_filesystem;

pub use configuration_filesystem::FilesystemConfigurationSource;
