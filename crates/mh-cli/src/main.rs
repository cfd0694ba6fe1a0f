//! Migration Handoff CLI - prints instructions for applying a SQL migration by hand

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;

use cli::{Cli, Commands, ShowArgs};
use commands::{show, statements};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let mut out = std::io::stdout().lock();
    match &cli.command {
        None => show::execute(&ShowArgs::default(), &cli.global, &mut out),
        Some(Commands::Show(args)) => show::execute(args, &cli.global, &mut out),
        Some(Commands::Statements(args)) => statements::execute(args, &cli.global, &mut out),
    }
}
