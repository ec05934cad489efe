//! Unpack operation reporting.

use std::time::Duration;

/// Report of a filesystem unpack operation.
///
/// Contains statistics about the reconstructed project tree.
#[derive(Debug, Clone, Default)]
pub struct UnpackReport {
    /// Number of asset files restored.
    pub files_restored: usize,

    /// Number of `.meta` sidecar files restored.
    pub meta_files_restored: usize,

    /// Number of identifier folders skipped for lack of a `pathname`.
    pub groups_skipped: usize,

    /// Total bytes written under the output root.
    pub bytes_written: u64,

    /// Duration of the unpack operation.
    pub duration: Duration,

    /// Warnings generated while unpacking.
    pub warnings: Vec<String>,
}

impl UnpackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns the number of files written, sidecars included.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files_restored + self.meta_files_restored
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
