//! Gzip envelope handling.
//!
//! Every `.unitypackage` is a single gzip member wrapping a tar stream. The
//! filesystem path streams through [`flate2::read::GzDecoder`]; the in-memory
//! path inflates the whole buffer up front with [`decompress_gzip`].

use std::io::Read;

use flate2::read::GzDecoder;

use crate::Result;
use crate::UnpackError;

/// Gzip magic bytes (`1F 8B`).
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Returns `true` if `data` starts with the gzip magic bytes.
#[must_use]
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Inflates a complete gzip member held in memory.
///
/// # Errors
///
/// Returns [`UnpackError::InvalidArchive`] if the buffer is not a valid gzip
/// stream or is truncated.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use flate2::Compression;
/// use flate2::write::GzEncoder;
/// use unitypack_core::formats::compression::decompress_gzip;
///
/// let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
/// encoder.write_all(b"payload").unwrap();
/// let compressed = encoder.finish().unwrap();
///
/// assert_eq!(decompress_gzip(&compressed).unwrap(), b"payload");
/// ```
pub fn decompress_gzip(data: &[u8]) -> Result<Vec<u8>> {
    if !is_gzip(data) {
        return Err(UnpackError::InvalidArchive(
            "not a gzip stream (bad magic)".to_string(),
        ));
    }

    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::with_capacity(data.len().saturating_mul(2));
    decoder
        .read_to_end(&mut out)
        .map_err(|e| UnpackError::InvalidArchive(format!("failed to inflate gzip stream: {e}")))?;
    Ok(out)
}
