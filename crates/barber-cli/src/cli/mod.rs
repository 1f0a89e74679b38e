use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `barber` binary.
#[derive(Debug, Parser)]
#[command(name = "barber", version, about = "Barbershop roles and admin access")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the nearest directory with .barber)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Act as this subject instead of `auth.subject_id`
    #[arg(short, long, global = true)]
    pub subject: Option<String>,

    /// Read from the hosted backend instead of the local database
    #[arg(long, global = true)]
    pub remote: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            subject: self.subject.clone(),
            remote: self.remote,
        }
    }
}
