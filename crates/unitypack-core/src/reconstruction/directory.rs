//! Filesystem reconstruction.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::formats::StagedFile;

use super::ReconstructionSink;

/// Sink that copies staged members into an output root.
///
/// Existing files at a destination are overwritten.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    files_restored: usize,
    meta_files_restored: usize,
    bytes_written: u64,
}

impl DirectorySink {
    /// Creates a sink writing under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files_restored: 0,
            meta_files_restored: 0,
            bytes_written: 0,
        }
    }

    /// Returns the destination of a package path under the output root.
    ///
    /// Leading separators are dropped so that every pathname lands under the
    /// root; no other validation is applied.
    #[must_use]
    pub fn destination(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches(['/', '\\']))
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of asset files written.
    #[must_use]
    pub fn files_restored(&self) -> usize {
        self.files_restored
    }

    /// Number of sidecar files written.
    #[must_use]
    pub fn meta_files_restored(&self) -> usize {
        self.meta_files_restored
    }

    /// Total bytes copied.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl ReconstructionSink<StagedFile> for DirectorySink {
    fn begin_group(&mut self, path: &str) -> Result<()> {
        if let Some(parent) = self.destination(path).parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn emit(&mut self, path: &str, payload: StagedFile, is_meta: bool) -> Result<()> {
        let destination = self.destination(path);
        let written = fs::copy(payload.path(), &destination)?;

        self.bytes_written += written;
        if is_meta {
            self.meta_files_restored += 1;
        } else {
            self.files_restored += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn staged(dir: &Path, name: &str, content: &[u8]) -> StagedFile {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        StagedFile::new(path)
    }

    #[test]
    fn test_destination_stays_under_root() {
        let sink = DirectorySink::new("/out");
        assert_eq!(
            sink.destination("Assets/A.cs"),
            PathBuf::from("/out/Assets/A.cs")
        );
        assert_eq!(
            sink.destination("/Assets/A.cs"),
            PathBuf::from("/out/Assets/A.cs")
        );
    }

    #[test]
    fn test_writes_asset_and_meta() {
        let scratch = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(out.path());

        sink.begin_group("Assets/Scripts/A.cs").unwrap();
        sink.emit(
            "Assets/Scripts/A.cs",
            staged(scratch.path(), "asset", b"class A {}"),
            false,
        )
        .unwrap();
        sink.emit(
            "Assets/Scripts/A.cs.meta",
            staged(scratch.path(), "asset.meta", b"guid: a"),
            true,
        )
        .unwrap();

        let asset = out.path().join("Assets/Scripts/A.cs");
        assert_eq!(fs::read(&asset).unwrap(), b"class A {}");
        assert_eq!(
            fs::read(out.path().join("Assets/Scripts/A.cs.meta")).unwrap(),
            b"guid: a"
        );
        assert_eq!(sink.files_restored(), 1);
        assert_eq!(sink.meta_files_restored(), 1);
        assert_eq!(sink.bytes_written(), 17);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let scratch = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("A.txt"), b"old content").unwrap();

        let mut sink = DirectorySink::new(out.path());
        sink.begin_group("A.txt").unwrap();
        sink.emit("A.txt", staged(scratch.path(), "asset", b"new"), false)
            .unwrap();

        assert_eq!(fs::read(out.path().join("A.txt")).unwrap(), b"new");
    }
}
