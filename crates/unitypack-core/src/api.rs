//! High-level public API for unpacking Unity packages.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::Result;
use crate::UnpackConfig;
use crate::UnpackError;
use crate::UnpackReport;
use crate::correlation::PackageIndex;
use crate::formats::EntrySource;
use crate::formats::MemoryPackage;
use crate::formats::ScratchPackage;
use crate::reconstruction::DirectorySink;
use crate::reconstruction::MemorySink;
use crate::reconstruction::UnpackResult;
use crate::reconstruction::reconstruct;

/// File extension of Unity asset-exchange archives.
pub const PACKAGE_EXTENSION: &str = ".unitypackage";

/// Unpacks a `.unitypackage` into its original project tree under
/// `output_dir`.
///
/// The output directory is created if it does not exist. Members are staged
/// in a private scratch directory that is removed before returning, whether
/// the call succeeds or fails. Files already written when a failure occurs
/// are left in place.
///
/// # Arguments
///
/// * `input` - Path to the package file
/// * `output_dir` - Root of the reconstructed project tree
/// * `config` - Unpack configuration
///
/// # Errors
///
/// Returns [`UnpackError::InputNotFound`] if `input` does not exist, before
/// any decoding. Any other failure is returned as
/// [`UnpackError::Extraction`] wrapping the cause.
///
/// # Examples
///
/// ```no_run
/// use unitypack_core::UnpackConfig;
/// use unitypack_core::unpack_package;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = unpack_package("Assets.unitypackage", "MyProject", &UnpackConfig::default())?;
/// println!("Restored {} files", report.files_restored);
/// # Ok(())
/// # }
/// ```
pub fn unpack_package<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    config: &UnpackConfig,
) -> Result<UnpackReport> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(UnpackError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    unpack_to_directory(input, output_dir.as_ref(), config).map_err(UnpackError::extraction)
}

fn unpack_to_directory(
    input: &Path,
    output_dir: &Path,
    config: &UnpackConfig,
) -> Result<UnpackReport> {
    let start = Instant::now();
    let size = fs::metadata(input)?.len();
    log::info!(
        "Starting Unity package extraction: {} ({:.2} MB)",
        input.display(),
        size as f64 / 1024.0 / 1024.0
    );

    fs::create_dir_all(output_dir)?;

    let mut package = ScratchPackage::open(input, config)?;
    let entries = package.read_entries()?;
    log::debug!(
        "decoded {} members via {}",
        entries.len(),
        package.format_name()
    );

    let index = PackageIndex::from_entries(entries)?;
    log::info!("Reconstructing Unity project structure...");

    let mut sink = DirectorySink::new(output_dir);
    let summary = reconstruct(index, &mut sink, config)?;

    let mut report = UnpackReport::new();
    for member in package.skipped_members() {
        report.add_warning(format!("member outside the package root was skipped: {member}"));
    }
    package.close()?;

    report.files_restored = sink.files_restored();
    report.meta_files_restored = sink.meta_files_restored();
    report.groups_skipped = summary.groups_skipped;
    report.bytes_written = sink.bytes_written();
    report.duration = start.elapsed();

    log::info!(
        "Extraction completed - {} files restored",
        report.files_restored
    );
    Ok(report)
}

/// Unpacks a `.unitypackage` held in memory.
///
/// Equivalent to [`unpack_bytes_with_config`] with the default
/// configuration.
///
/// # Errors
///
/// Returns [`UnpackError::Extraction`] if the buffer cannot be decoded.
///
/// # Examples
///
/// ```
/// use unitypack_core::test_utils::PackageBuilder;
/// use unitypack_core::unpack_bytes;
///
/// let bytes = PackageBuilder::new()
///     .add_asset("guid1", "Assets/Scripts/A.cs", b"class A {}", b"guid: guid1")
///     .build();
///
/// let result = unpack_bytes(&bytes).unwrap();
/// assert_eq!(result.file_count, 1);
/// assert_eq!(result.structure, vec!["Assets", "Assets/Scripts"]);
/// ```
pub fn unpack_bytes(data: &[u8]) -> Result<UnpackResult> {
    unpack_bytes_with_config(data, &UnpackConfig::default())
}

/// Unpacks a `.unitypackage` held in memory with explicit configuration.
///
/// No filesystem access takes place; `config.scratch_root` is ignored.
///
/// # Errors
///
/// Returns [`UnpackError::Extraction`] if the buffer cannot be decoded, or
/// if strict mode rejects an identifier folder.
pub fn unpack_bytes_with_config(data: &[u8], config: &UnpackConfig) -> Result<UnpackResult> {
    unpack_in_memory(data, config).map_err(UnpackError::extraction)
}

fn unpack_in_memory(data: &[u8], config: &UnpackConfig) -> Result<UnpackResult> {
    let mut package = MemoryPackage::new(data);
    let entries = package.read_entries()?;
    let index = PackageIndex::from_entries(entries)?;

    let mut sink = MemorySink::new();
    let summary = reconstruct(index, &mut sink, config)?;
    log::debug!(
        "reconstructed {} groups in memory ({} skipped)",
        summary.groups_restored,
        summary.groups_skipped
    );
    Ok(sink.into_result())
}

/// Returns `true` if the path ends in `.unitypackage`, ignoring case.
///
/// # Examples
///
/// ```
/// use unitypack_core::has_package_extension;
///
/// assert!(has_package_extension("Props.UnityPackage"));
/// assert!(!has_package_extension("Props.unitypackages"));
/// ```
pub fn has_package_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(PACKAGE_EXTENSION)
}

/// Reports whether `path` names an existing regular file with the
/// `.unitypackage` extension.
///
/// Advisory only: the unpack functions do not call it.
pub fn is_valid_unity_package<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    has_package_extension(path) && fs::metadata(path).is_ok_and(|m| m.is_file())
}
