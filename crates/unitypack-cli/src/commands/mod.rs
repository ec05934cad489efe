//! Command implementations.

pub mod completion;
pub mod dry_run;
pub mod unpack;

use crate::cli::Cli;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use std::path::Path;
use std::path::PathBuf;
use unitypack_core::UnpackConfig;
use unitypack_core::has_package_extension;

/// Returns the input path after the checks shared by every unpack mode.
///
/// A missing input is fatal and reported before any decoding; a foreign
/// extension only produces a warning.
pub fn checked_input<'a>(cli: &'a Cli, formatter: &dyn OutputFormatter) -> Result<&'a Path> {
    let Some(input) = cli.input.as_deref() else {
        bail!("No input file given");
    };

    if !input.exists() {
        bail!("Input file \"{}\" does not exist", input.display());
    }

    if !has_package_extension(input) {
        formatter.format_warning("Input file does not have .unitypackage extension");
    }

    Ok(input)
}

/// Builds the core configuration from CLI flags.
pub fn unpack_config(cli: &Cli) -> UnpackConfig {
    UnpackConfig::default()
        .with_strict(cli.strict)
        .with_scratch_root(cli.scratch_dir.clone())
}

/// Makes a path absolute against the current directory for display.
pub fn display_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
