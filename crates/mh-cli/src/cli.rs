//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use mh_core::Method;
use std::path::PathBuf;

/// Migration Handoff - print instructions for applying a SQL migration by hand
///
/// Run without a subcommand to print instructions for the default migration.
#[derive(Parser, Debug)]
#[command(name = "mh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (default: show)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path
    #[arg(short, long, global = true, env = "MH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print operator instructions followed by the migration SQL
    Show(ShowArgs),

    /// List the statements in a migration without running them
    Statements(StatementsArgs),
}

/// Arguments for the show command
#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Migration file, relative to the project directory (default: from
    /// handoff.yml, else the built-in path)
    pub path: Option<PathBuf>,

    /// Methods to print, in order (repeatable or comma-separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub method: Vec<MethodArg>,
}

/// Method selection on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    /// Hosted SQL editor
    Console,
    /// psql command line
    Psql,
    /// Raw SQL for copy and paste
    Manual,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Console => Method::Console,
            MethodArg::Psql => Method::Psql,
            MethodArg::Manual => Method::Manual,
        }
    }
}

/// Arguments for the statements command
#[derive(Args, Debug)]
pub struct StatementsArgs {
    /// Migration file, relative to the project directory (default: from
    /// handoff.yml, else the built-in path)
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: StatementsOutput,
}

/// Statement listing formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementsOutput {
    /// One line per statement
    Table,
    /// JSON report with checksum
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
