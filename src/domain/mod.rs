pub mod configuration;
pub mod error;

pub use configuration::{
    Configuration, DocumentFormat, EnglishDictionary, Pattern, Patterns, Platform, Presence,
    Sources,
};
pub use error::ConfigError;
