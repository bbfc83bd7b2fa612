//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::configuration::{
    ASSEMBLY_DIR, DEFAULT_FILE_NAME, configuration_path, render_configuration,
};
use crate::domain::{ConfigError, Configuration, DocumentFormat, Platform};

#[derive(Parser)]
#[command(name = "toolchain-config")]
#[command(version)]
#[command(
    about = "Inspect the regex-assembly toolchain configuration",
    long_about = None
)]
struct Cli {
    /// Log loader activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where to find the configuration file.
#[derive(Args)]
struct Location {
    /// Directory containing the configuration file
    #[arg(short, long, default_value = ASSEMBLY_DIR)]
    directory: PathBuf,
    /// Configuration file name
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    file: String,
}

impl Location {
    fn load(&self) -> Result<Configuration, ConfigError> {
        Configuration::load(&self.directory, &self.file)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Verify that the configuration file loads
    #[clap(visible_alias = "c")]
    Check {
        #[command(flatten)]
        location: Location,
    },
    /// Print the loaded configuration
    #[clap(visible_alias = "s")]
    Show {
        #[command(flatten)]
        location: Location,
        /// Output format: yaml or json
        #[arg(long, default_value = "yaml")]
        format: DocumentFormat,
    },
    /// Print every pattern for one platform
    #[clap(visible_alias = "p")]
    Patterns {
        #[command(flatten)]
        location: Location,
        /// Platform variant: unix or windows (defaults to the current platform)
        #[arg(long)]
        platform: Option<Platform>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    super::logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { location } => run_check(&location),
        Commands::Show { location, format } => run_show(&location, format),
        Commands::Patterns { location, platform } => {
            run_patterns(&location, platform.unwrap_or_else(Platform::current))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_check(location: &Location) -> Result<(), ConfigError> {
    let config = location.load()?;
    let path = configuration_path(&location.directory, &location.file);

    println!("✅ {} is a valid toolchain configuration", path.display());
    match config.sources.english_dictionary.explicit_commit_ref() {
        Some(commit_ref) => println!("  english-dictionary commit-ref: {}", commit_ref),
        None => println!("  english-dictionary commit-ref: (not set)"),
    }
    let defined = config.patterns.entries().iter().filter(|(_, p)| !p.is_empty()).count();
    println!("  patterns defined: {}/{}", defined, config.patterns.entries().len());
    Ok(())
}

fn run_show(location: &Location, format: DocumentFormat) -> Result<(), ConfigError> {
    let config = location.load()?;
    let rendered = render_configuration(&config, format)?;

    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn run_patterns(location: &Location, platform: Platform) -> Result<(), ConfigError> {
    let config = location.load()?;

    println!("Patterns for {}:", platform);
    for (key, pattern) in config.patterns.entries() {
        println!("  {}: {}", key, pattern.for_platform(platform));
    }
    Ok(())
}
