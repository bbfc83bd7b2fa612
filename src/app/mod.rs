pub mod cli;
pub mod loader;
pub mod logging;

pub use loader::load_configuration;
