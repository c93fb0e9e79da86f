use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries patched source and generated arrays
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("graft=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Patch {
            table,
            input,
            output,
            capacity,
            report,
        } => commands::patch::run(&table, input.as_deref(), output.as_deref(), capacity, report),
        Command::Scan { table, input } => commands::scan::run(&table, input.as_deref()),
        Command::GenArray { name } => commands::gen_array::run(&name),
    }
}
