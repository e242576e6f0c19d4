use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::{Commands, MsaCommands, ServeArgs};
pub use global::{GlobalFlags, OutputFormat};

/// Top-level parser for the `accord` binary.
#[derive(Debug, Parser)]
#[command(name = "accord", version, about = "Accord - contract records API and tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the API (overrides `client.base_url`)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            api_url: self.api_url.clone(),
        }
    }
}
