//! Dry-run command implementation.
//!
//! Decodes the package in memory and prints the tree it would produce.

use super::checked_input;
use super::display_path;
use super::unpack_config;
use crate::cli::Cli;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use unitypack_core::unpack_bytes_with_config;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let input = checked_input(cli, formatter)?;

    let bytes =
        fs::read(input).with_context(|| format!("failed to read '{}'", input.display()))?;
    log::debug!("read {} bytes from {}", bytes.len(), input.display());

    let result = add_package_context(unpack_bytes_with_config(&bytes, &unpack_config(cli)), input)?;
    formatter.format_dry_run(&display_path(input), &result)?;

    Ok(())
}
