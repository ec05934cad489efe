//! Error conversion utilities for CLI.
//!
//! Converts unitypack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use unitypack_core::UnpackError;

/// Converts `UnpackError` to user-friendly anyhow error with context
///
/// The `Extraction` wrapper is peeled so the message reflects the root cause.
pub fn convert_unpack_error(err: UnpackError, package: &Path) -> anyhow::Error {
    match err {
        UnpackError::InputNotFound { path } => {
            anyhow!("Input file \"{}\" does not exist", path.display())
        }
        UnpackError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid Unity package '{}': {}\n\
                 HINT: The package may be corrupted or truncated. Re-export it from the Unity editor.",
                package.display(),
                reason
            )
        }
        UnpackError::IncompleteGroup { identifier } => {
            anyhow!(
                "Identifier folder '{}' in '{}' has no pathname entry\n\
                 HINT: Run without --strict to skip such folders.",
                identifier,
                package.display()
            )
        }
        UnpackError::Io(io_err) => {
            anyhow!(
                "I/O error while unpacking '{}': {}\n\
                 HINT: Check that the output directory is writable and the disk is not full.",
                package.display(),
                io_err
            )
        }
        UnpackError::Extraction { source } => convert_unpack_error(*source, package),
    }
}

/// Adds context to a generic error about unpack operations
pub fn add_package_context<T>(
    result: Result<T, UnpackError>,
    package: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_unpack_error(e, package))
}
