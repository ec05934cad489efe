//! Library-backed decoding through a private scratch directory.
//!
//! The gzip envelope and tar stream are handled by `flate2` and `tar`. Every
//! member is unpacked into a randomly named directory that belongs to one
//! call only; the directory is removed when the [`ScratchPackage`] is closed
//! or dropped, on success and on failure alike.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use flate2::read::GzDecoder;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::Result;
use crate::UnpackConfig;
use crate::UnpackError;

use super::traits::EntrySource;
use super::traits::SourceEntry;
use super::traits::StagedFile;

const SCRATCH_PREFIX: &str = ".unitypack-scratch-";

/// A package on disk, staged member by member into a scratch directory.
#[derive(Debug)]
pub struct ScratchPackage {
    input: PathBuf,
    scratch: TempDir,
    skipped_members: Vec<String>,
}

impl ScratchPackage {
    /// Creates the scratch area for unpacking `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch directory cannot be created.
    pub fn open(input: &Path, config: &UnpackConfig) -> Result<Self> {
        let parent = config.scratch_parent();
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(&parent)?;
        log::debug!("scratch area: {}", scratch.path().display());

        Ok(Self {
            input: input.to_path_buf(),
            scratch,
            skipped_members: Vec::new(),
        })
    }

    /// Returns the scratch directory.
    #[must_use]
    pub fn scratch_path(&self) -> &Path {
        self.scratch.path()
    }

    /// Returns member names that were refused while staging.
    #[must_use]
    pub fn skipped_members(&self) -> &[String] {
        &self.skipped_members
    }

    /// Removes the scratch directory, reporting any removal failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be deleted.
    pub fn close(self) -> Result<()> {
        self.scratch.close()?;
        Ok(())
    }

    fn stage(&mut self) -> Result<()> {
        let file = File::open(&self.input)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut archive = tar::Archive::new(decoder);
        archive.set_preserve_permissions(false);
        archive.set_preserve_mtime(false);
        archive.set_overwrite(true);

        let entries = archive
            .entries()
            .map_err(|e| malformed("failed to read TAR entries", &e))?;

        for entry_result in entries {
            let mut entry = entry_result.map_err(|e| malformed("failed to read TAR entry", &e))?;
            let name = entry
                .path()
                .map_err(|e| malformed("invalid member path", &e))?
                .to_string_lossy()
                .into_owned();

            let unpacked = entry
                .unpack_in(self.scratch.path())
                .map_err(|e| classify_unpack_error(&name, e))?;
            if !unpacked {
                log::warn!("refusing member outside the package root: {name}");
                self.skipped_members.push(name);
            }
        }

        Ok(())
    }

    fn collect(&self) -> Result<Vec<SourceEntry<StagedFile>>> {
        let root = self.scratch.path();
        let mut staged = Vec::new();

        for dir_entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(io::Error::from)?;
            if !dir_entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = dir_entry.path().strip_prefix(root) else {
                continue;
            };
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let size = dir_entry.metadata().map_err(io::Error::from)?.len();

            staged.push(SourceEntry {
                name,
                size,
                payload: StagedFile::new(dir_entry.path()),
            });
        }

        Ok(staged)
    }
}

impl EntrySource for ScratchPackage {
    type Payload = StagedFile;

    fn read_entries(&mut self) -> Result<Vec<SourceEntry<StagedFile>>> {
        self.stage()?;
        self.collect()
    }

    fn format_name(&self) -> &str {
        "tar.gz (staged)"
    }
}

fn malformed(context: &str, err: &io::Error) -> UnpackError {
    UnpackError::InvalidArchive(format!("{context}: {err}"))
}

/// Decode failures surface from `unpack_in` while the payload is read; keep
/// them apart from failures writing into the scratch area.
fn classify_unpack_error(name: &str, err: io::Error) -> UnpackError {
    match err.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
            UnpackError::InvalidArchive(format!("failed to read member '{name}': {err}"))
        }
        _ => UnpackError::Io(err),
    }
}
