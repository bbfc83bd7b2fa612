pub mod english_dictionary;
pub mod model;
pub mod parse;
pub mod paths;
pub mod patterns;
pub mod presence;

pub use english_dictionary::EnglishDictionary;
pub use model::{Configuration, Sources};
pub use parse::{DocumentFormat, parse_configuration, render_configuration};
pub use paths::{ASSEMBLY_DIR, DEFAULT_FILE_NAME, assembly_dir, configuration_path};
pub use patterns::{Pattern, Patterns, Platform};
pub use presence::Presence;
