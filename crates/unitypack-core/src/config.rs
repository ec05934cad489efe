//! Unpack configuration.

use std::path::Path;
use std::path::PathBuf;

/// Options controlling how a package is unpacked.
///
/// The defaults reproduce the lenient behaviour Unity tooling expects:
/// identifier folders without a `pathname` member are skipped silently and
/// the scratch area lives under the system temporary directory.
///
/// # Examples
///
/// ```
/// use unitypack_core::UnpackConfig;
///
/// let config = UnpackConfig::default();
/// assert!(!config.strict);
///
/// let strict = UnpackConfig::default().with_strict(true);
/// assert!(strict.strict);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnpackConfig {
    /// Reject identifier folders that have no `pathname` member.
    pub strict: bool,

    /// Parent directory for the per-call scratch area.
    ///
    /// `None` uses the system temporary directory. The scratch area itself
    /// always gets a random name, so concurrent calls never collide.
    pub scratch_root: Option<PathBuf>,
}

impl UnpackConfig {
    /// Sets strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the parent directory of the scratch area.
    #[must_use]
    pub fn with_scratch_root(mut self, root: Option<PathBuf>) -> Self {
        self.scratch_root = root;
        self
    }

    /// Returns the directory the scratch area is created in.
    #[must_use]
    pub fn scratch_parent(&self) -> PathBuf {
        self.scratch_root
            .as_deref()
            .map_or_else(std::env::temp_dir, Path::to_path_buf)
    }
}
