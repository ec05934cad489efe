//! Test utilities for building `.unitypackage` archives in memory.
//!
//! These helpers produce real gzip-compressed tar streams laid out the way
//! Unity writes them, so tests exercise the same decoding paths as
//! production packages.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::formats::ustar::BLOCK_SIZE;

/// Gzip-compresses a buffer.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Builds a bare tar header block carrying a name, an octal size and a
/// valid checksum.
///
/// The name is written verbatim, so streams `tar::Builder` would normalize
/// (such as `./`-prefixed members) can be hand-crafted.
#[must_use]
pub fn raw_header(name: &str, size: u64) -> [u8; BLOCK_SIZE] {
    let mut header = [0u8; BLOCK_SIZE];
    let name = name.as_bytes();
    let len = name.len().min(100);
    header[..len].copy_from_slice(&name[..len]);
    header[100..107].copy_from_slice(b"0000644");
    let size_field = format!("{size:011o}");
    header[124..135].copy_from_slice(&size_field.as_bytes()[..11]);
    header[257..262].copy_from_slice(b"ustar");

    header[148..156].fill(b' ');
    let checksum: u32 = header.iter().map(|&b| u32::from(b)).sum();
    header[148..155].copy_from_slice(format!("{checksum:06o}\0").as_bytes());
    header
}

/// Builds a tar stream from hand-written headers, padding each payload to a
/// block boundary and appending the end-of-archive marker.
#[must_use]
pub fn raw_tar(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut tar = Vec::new();
    for (name, data) in members {
        tar.extend_from_slice(&raw_header(name, data.len() as u64));
        tar.extend_from_slice(data);
        tar.resize(tar.len().next_multiple_of(BLOCK_SIZE), 0);
    }
    tar.extend_from_slice(&[0u8; 2 * BLOCK_SIZE]);
    tar
}

/// Builder for `.unitypackage` test archives.
///
/// # Examples
///
/// ```
/// use unitypack_core::test_utils::PackageBuilder;
///
/// let bytes = PackageBuilder::new()
///     .add_asset("0a1b2c", "Assets/Scripts/Player.cs", b"class Player {}", b"guid: 0a1b2c")
///     .add_entry("0a1b2c/preview.png", b"\x89PNG")
///     .build();
/// assert!(!bytes.is_empty());
/// ```
pub struct PackageBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl PackageBuilder {
    /// Creates a new, empty package builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    /// Adds a raw member.
    #[must_use]
    pub fn add_entry(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    /// Adds a directory member, as Unity writes for each identifier folder.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o755);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a complete identifier folder: pathname, asset and sidecar.
    #[must_use]
    pub fn add_asset(self, guid: &str, pathname: &str, asset: &[u8], meta: &[u8]) -> Self {
        self.add_directory(&format!("{guid}/"))
            .add_entry(&format!("{guid}/pathname"), pathname.as_bytes())
            .add_entry(&format!("{guid}/asset"), asset)
            .add_entry(&format!("{guid}/asset.meta"), meta)
    }

    /// Adds an identifier folder for a directory: pathname and sidecar only.
    #[must_use]
    pub fn add_folder(self, guid: &str, pathname: &str, meta: &[u8]) -> Self {
        self.add_directory(&format!("{guid}/"))
            .add_entry(&format!("{guid}/pathname"), pathname.as_bytes())
            .add_entry(&format!("{guid}/asset.meta"), meta)
    }

    /// Returns the uncompressed tar stream.
    #[must_use]
    pub fn build_tar(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Returns the gzip-compressed package.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        gzip(&self.build_tar())
    }
}

impl Default for PackageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the two-asset package used across the test suites.
///
/// Contains `Assets/Scripts/MyScript.cs` (guid1) and
/// `Assets/Prefabs/MyPrefab.prefab` (guid2), each with a sidecar.
#[must_use]
pub fn sample_package() -> Vec<u8> {
    PackageBuilder::new()
        .add_asset(
            "guid1",
            "Assets/Scripts/MyScript.cs",
            b"Binary asset data",
            b"fileFormatVersion: 2\nguid: guid1\n",
        )
        .add_asset(
            "guid2",
            "Assets/Prefabs/MyPrefab.prefab",
            b"Another asset",
            b"fileFormatVersion: 2\nguid: guid2\n",
        )
        .build()
}
