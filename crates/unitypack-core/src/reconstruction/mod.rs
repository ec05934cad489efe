//! Reconstruction of the project tree from correlated identifier folders.
//!
//! [`reconstruct`] walks a [`PackageIndex`] once and hands every resolvable
//! asset and sidecar to a [`ReconstructionSink`]. [`DirectorySink`] writes
//! through to an output root; [`MemorySink`] collects records in memory.

pub mod directory;
pub mod memory;

pub use directory::DirectorySink;
pub use memory::MemorySink;
pub use memory::ReconstructedFile;
pub use memory::UnpackResult;

use crate::Result;
use crate::UnpackConfig;
use crate::UnpackError;
use crate::correlation::PackageIndex;

/// Suffix appended to an asset path to name its sidecar.
pub const META_SUFFIX: &str = ".meta";

/// Destination for reconstructed files.
pub trait ReconstructionSink<P> {
    /// Called once per resolvable group, before any of its files.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot prepare for `path`.
    fn begin_group(&mut self, path: &str) -> Result<()>;

    /// Receives one reconstructed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be stored.
    fn emit(&mut self, path: &str, payload: P, is_meta: bool) -> Result<()>;
}

/// Counts from one [`reconstruct`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconstructionSummary {
    /// Groups that had a pathname.
    pub groups_restored: usize,
    /// Groups skipped for lack of a pathname.
    pub groups_skipped: usize,
}

/// Drives `sink` over every group of `index`.
///
/// Groups without a pathname are skipped, or rejected with
/// [`UnpackError::IncompleteGroup`] when `config.strict` is set. For each
/// remaining group the asset is emitted at its pathname and the sidecar at
/// the pathname plus [`META_SUFFIX`]; either may be missing independently.
///
/// # Errors
///
/// Returns the first error raised by the sink, or an incomplete-group error
/// in strict mode.
pub fn reconstruct<P, S>(
    index: PackageIndex<P>,
    sink: &mut S,
    config: &UnpackConfig,
) -> Result<ReconstructionSummary>
where
    S: ReconstructionSink<P> + ?Sized,
{
    let mut summary = ReconstructionSummary::default();

    for (identifier, group) in index {
        let Some(path) = group.pathname else {
            if config.strict {
                return Err(UnpackError::IncompleteGroup { identifier });
            }
            log::debug!("Skipping {identifier}: no pathname file");
            summary.groups_skipped += 1;
            continue;
        };

        sink.begin_group(&path)?;

        if let Some(asset) = group.asset {
            sink.emit(&path, asset, false)?;
            log::debug!("Restored: {path}");
        }

        if let Some(meta) = group.meta {
            let meta_path = format!("{path}{META_SUFFIX}");
            sink.emit(&meta_path, meta, true)?;
            log::debug!("Restored: {meta_path}");
        }

        summary.groups_restored += 1;
    }

    Ok(summary)
}
