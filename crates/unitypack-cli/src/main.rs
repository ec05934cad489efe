//! unity-unpack - Command-line tool for reconstructing Unity projects from
//! `.unitypackage` files.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        commands::completion::execute(shell);
        return Ok(());
    }

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    if cli.dry_run {
        commands::dry_run::execute(&cli, &*formatter)
    } else {
        commands::unpack::execute(&cli, &*formatter)
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
