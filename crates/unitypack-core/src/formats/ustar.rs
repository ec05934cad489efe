//! Minimal in-memory tar reader.
//!
//! Walks a decompressed tar stream block by block, reading only the two
//! header fields a `.unitypackage` needs: the member name and its size. Link
//! targets, modes, checksums and extension headers are not interpreted.

use crate::Result;
use crate::UnpackError;

use super::compression::decompress_gzip;
use super::traits::EntrySource;
use super::traits::RawEntry;

/// Size of a tar header block and of the payload padding unit.
pub const BLOCK_SIZE: usize = 512;

const NAME_FIELD: std::ops::Range<usize> = 0..100;
const SIZE_FIELD: std::ops::Range<usize> = 124..136;

/// Parses a tar size field written in ASCII octal.
///
/// NUL bytes and surrounding whitespace are ignored and the leading run of
/// octal digits is read. An empty field, or one that does not start with an
/// octal digit, yields `0`.
///
/// # Examples
///
/// ```
/// use unitypack_core::formats::ustar::parse_octal_size;
///
/// assert_eq!(parse_octal_size(b"00000000041 "), 33);
/// assert_eq!(parse_octal_size(b"00000001750\0"), 1000);
/// assert_eq!(parse_octal_size(&[0u8; 12]), 0);
/// ```
#[must_use]
pub fn parse_octal_size(field: &[u8]) -> u64 {
    let trimmed = field
        .iter()
        .copied()
        .filter(|&b| b != 0)
        .skip_while(u8::is_ascii_whitespace);

    let mut size: u64 = 0;
    for byte in trimmed {
        if !(b'0'..=b'7').contains(&byte) {
            break;
        }
        match size
            .checked_mul(8)
            .and_then(|s| s.checked_add(u64::from(byte - b'0')))
        {
            Some(next) => size = next,
            None => return 0,
        }
    }
    size
}

/// Decodes the member name from a header block.
///
/// Reads up to the first NUL of the 100-byte name field and trims
/// surrounding whitespace. A block too short to hold the field has no name.
fn parse_name(header: &[u8]) -> String {
    let Some(field) = header.get(NAME_FIELD) else {
        return String::new();
    };
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).trim().to_string()
}

/// Drops empty and `.` segments, as `tar` does when unpacking, so that
/// `./guid/asset` and `/guid/asset` name the member `guid/asset`.
///
/// # Examples
///
/// ```
/// use unitypack_core::formats::ustar::normalize_member_name;
///
/// assert_eq!(normalize_member_name("./guid/asset"), "guid/asset");
/// assert_eq!(normalize_member_name("guid//asset.meta"), "guid/asset.meta");
/// assert_eq!(normalize_member_name("./"), "");
/// ```
#[must_use]
pub fn normalize_member_name(name: &str) -> String {
    name.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Rounds a payload size up to the next block boundary.
fn padded_len(size: u64) -> Option<usize> {
    let size = usize::try_from(size).ok()?;
    size.checked_next_multiple_of(BLOCK_SIZE)
}

/// Splits an uncompressed tar stream into its members.
///
/// The walk stops at the first all-zero header block or at the end of the
/// buffer. Headers with an empty name are skipped one block at a time
/// without consuming a payload. Member names are normalized with
/// [`normalize_member_name`]; a member whose name normalizes to nothing
/// (such as `./`) is stepped over, payload included.
///
/// # Errors
///
/// Returns [`UnpackError::InvalidArchive`] if a header block is cut short by
/// the end of the buffer, or if a payload extends past it.
pub fn parse_tar(data: &[u8]) -> Result<Vec<RawEntry>> {
    let mut entries = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let remaining = &data[offset..];
        if remaining.len() < BLOCK_SIZE {
            if remaining.iter().all(|&b| b == 0) {
                break;
            }
            return Err(UnpackError::InvalidArchive(format!(
                "truncated header at offset {offset}"
            )));
        }

        let header = &remaining[..BLOCK_SIZE];
        if header.iter().all(|&b| b == 0) {
            break;
        }

        let name = parse_name(header);
        if name.is_empty() {
            offset += BLOCK_SIZE;
            continue;
        }

        let size = parse_octal_size(&header[SIZE_FIELD]);
        let payload_start = offset + BLOCK_SIZE;
        let payload = usize::try_from(size)
            .ok()
            .and_then(|len| data.get(payload_start..payload_start.checked_add(len)?))
            .ok_or_else(|| {
                UnpackError::InvalidArchive(format!(
                    "truncated payload for '{name}' ({size} bytes declared)"
                ))
            })?;

        let member = normalize_member_name(&name);
        if !member.is_empty() {
            entries.push(RawEntry {
                name: member,
                size,
                payload: payload.to_vec(),
            });
        }

        let padded = padded_len(size).ok_or_else(|| {
            UnpackError::InvalidArchive(format!("entry size {size} out of range"))
        })?;
        offset = payload_start.saturating_add(padded);
    }

    Ok(entries)
}

/// A `.unitypackage` held entirely in memory.
///
/// Inflates the gzip envelope and walks the tar stream with [`parse_tar`];
/// no filesystem access takes place.
#[derive(Debug)]
pub struct MemoryPackage<'a> {
    data: &'a [u8],
}

impl<'a> MemoryPackage<'a> {
    /// Wraps a compressed package buffer.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl EntrySource for MemoryPackage<'_> {
    type Payload = Vec<u8>;

    fn read_entries(&mut self) -> Result<Vec<RawEntry>> {
        let tar = decompress_gzip(self.data)?;
        log::debug!(
            "inflated package: {} -> {} bytes",
            self.data.len(),
            tar.len()
        );
        parse_tar(&tar)
    }

    fn format_name(&self) -> &str {
        "ustar (in-memory)"
    }
}
