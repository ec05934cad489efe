//! Unpack command implementation.

use super::checked_input;
use super::display_path;
use super::unpack_config;
use crate::cli::Cli;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use crate::progress::UnpackSpinner;
use anyhow::Context;
use anyhow::Result;
use std::env;
use unitypack_core::unpack_package;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let input = checked_input(cli, formatter)?;

    let output_dir = match &cli.output {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    formatter.format_paths(&display_path(input), &display_path(&output_dir));

    let config = unpack_config(cli);

    // Spinner only on an interactive terminal, and never alongside log output
    let spinner = (!cli.quiet && !cli.json && !cli.verbose && UnpackSpinner::should_show())
        .then(|| UnpackSpinner::new("Unpacking"));
    let result = unpack_package(input, &output_dir, &config);
    drop(spinner);

    let report = add_package_context(result, input)?;
    formatter.format_unpack_result(&report)?;

    Ok(())
}
