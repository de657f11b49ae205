use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, GenerateArgs, ListArgs};

/// Top-level CLI parser for the `tsm` binary.
#[derive(Debug, Parser)]
#[command(name = "tsm", version, about = "testsmith - JUnit skeletons from Java classes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for listings and summaries: table, json
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no method listing)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
