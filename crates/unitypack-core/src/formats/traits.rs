//! Common traits for package decoders.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;

/// One member of a decoded package, in archive order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry<P> {
    /// Member path inside the archive, `/`-delimited.
    pub name: String,
    /// Payload size in bytes.
    pub size: u64,
    /// Handle to the member's content.
    pub payload: P,
}

/// A member decoded fully into memory.
pub type RawEntry = SourceEntry<Vec<u8>>;

/// Content of a package member, wherever it is stored.
pub trait Payload {
    /// Reads the payload as text, replacing invalid UTF-8 sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be read.
    fn read_text(&self) -> Result<String>;
}

impl Payload for Vec<u8> {
    fn read_text(&self) -> Result<String> {
        Ok(String::from_utf8_lossy(self).into_owned())
    }
}

/// A member staged as a file in a scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Creates a handle to a staged member.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the location of the staged member.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Payload for StagedFile {
    fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A decoding strategy that turns a package into its member sequence.
pub trait EntrySource {
    /// Payload handle produced for each member.
    type Payload: Payload;

    /// Decodes the package and returns its members in archive order.
    ///
    /// # Errors
    ///
    /// Returns an error if the envelope is malformed or cannot be read.
    fn read_entries(&mut self) -> Result<Vec<SourceEntry<Self::Payload>>>;

    /// Returns a short name for the decoding strategy.
    fn format_name(&self) -> &str;
}
