mod configuration_source;

pub use configuration_source::ConfigurationSource;
