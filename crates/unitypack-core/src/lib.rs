//! Reconstruction of Unity project trees from `.unitypackage` archives.
//!
//! A `.unitypackage` is a gzip-compressed tar archive that stores every asset
//! under a random identifier folder holding a `pathname` member (the original
//! project path), an `asset` member (the content) and an `asset.meta` member
//! (Unity's sidecar). `unitypack-core` groups those members back together and
//! recreates the original tree, either on disk or in memory.
//!
//! # Examples
//!
//! ```no_run
//! use unitypack_core::UnpackConfig;
//! use unitypack_core::unpack_package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = unpack_package("Props.unitypackage", "MyProject", &UnpackConfig::default())?;
//! println!("Restored {} files", report.files_restored);
//! # Ok(())
//! # }
//! ```
//!
//! Without touching the filesystem:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("Props.unitypackage")?;
//! let result = unitypack_core::unpack_bytes(&bytes)?;
//! for file in &result.files {
//!     println!("{} ({} bytes)", file.path, file.content.len());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod correlation;
pub mod error;
pub mod formats;
pub mod reconstruction;
pub mod report;
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::has_package_extension;
pub use api::is_valid_unity_package;
pub use api::unpack_bytes;
pub use api::unpack_bytes_with_config;
pub use api::unpack_package;
pub use config::UnpackConfig;
pub use error::Result;
pub use error::UnpackError;
pub use reconstruction::ReconstructedFile;
pub use reconstruction::UnpackResult;
pub use report::UnpackReport;
