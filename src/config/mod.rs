pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "autoshop-records")]
#[command(about = "Validate appointment records and enrich vehicle records")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run both operations on built-in sample records
    Demo,
    /// Check appointment records for required fields
    Validate(BatchArgs),
    /// Add derived fields to vehicle records
    Enrich(BatchArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct BatchArgs {
    /// JSON file with one object or an array of objects ("-" for stdin)
    pub input: String,

    #[arg(long, short, help = "Write results here instead of stdout")]
    pub output: Option<String>,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::validate_path;

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Command::Validate(args) | Command::Enrich(args) = &self.command {
            validate_path("input", &args.input)?;
            if let Some(output) = &args.output {
                validate_path("output", output)?;
            }
        }
        Ok(())
    }
}
