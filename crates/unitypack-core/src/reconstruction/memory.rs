//! In-memory reconstruction.

use std::collections::BTreeSet;

use crate::Result;

use super::ReconstructionSink;

/// One file of the reconstructed project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructedFile {
    /// Original project-relative path (sidecars end in `.meta`).
    pub path: String,
    /// File content, byte-for-byte as stored in the package.
    pub content: Vec<u8>,
    /// Whether this is a `.meta` sidecar.
    pub is_meta_file: bool,
}

/// Result of an in-memory unpack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackResult {
    /// Reconstructed assets and sidecars, in package order.
    pub files: Vec<ReconstructedFile>,
    /// Number of non-sidecar files.
    pub file_count: usize,
    /// Every directory prefix of the restored paths, sorted and deduplicated.
    pub structure: Vec<String>,
}

impl UnpackResult {
    /// Returns the record for `path`, if present.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&ReconstructedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Iterates over asset records, skipping sidecars.
    pub fn assets(&self) -> impl Iterator<Item = &ReconstructedFile> {
        self.files.iter().filter(|f| !f.is_meta_file)
    }
}

/// Returns every strict directory prefix of a `/`-delimited path.
///
/// # Examples
///
/// ```
/// use unitypack_core::reconstruction::memory::directory_prefixes;
///
/// assert_eq!(
///     directory_prefixes("Assets/Scripts/A.cs"),
///     vec!["Assets".to_string(), "Assets/Scripts".to_string()]
/// );
/// assert!(directory_prefixes("README.md").is_empty());
/// ```
#[must_use]
pub fn directory_prefixes(path: &str) -> Vec<String> {
    path.match_indices('/')
        .map(|(idx, _)| path[..idx].to_string())
        .collect()
}

/// Sink that collects reconstructed files and directory prefixes.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<ReconstructedFile>,
    structure: BTreeSet<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finishes collection and returns the result.
    #[must_use]
    pub fn into_result(self) -> UnpackResult {
        let file_count = self.files.iter().filter(|f| !f.is_meta_file).count();
        UnpackResult {
            files: self.files,
            file_count,
            structure: self.structure.into_iter().collect(),
        }
    }
}

impl ReconstructionSink<Vec<u8>> for MemorySink {
    fn begin_group(&mut self, path: &str) -> Result<()> {
        self.structure.extend(directory_prefixes(path));
        Ok(())
    }

    fn emit(&mut self, path: &str, payload: Vec<u8>, is_meta: bool) -> Result<()> {
        self.files.push(ReconstructedFile {
            path: path.to_string(),
            content: payload,
            is_meta_file: is_meta,
        });
        Ok(())
    }
}
