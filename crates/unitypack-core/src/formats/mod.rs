//! Package decoders.
//!
//! Two strategies produce the same member sequence: [`ScratchPackage`]
//! delegates to `flate2` and `tar` and stages members on disk, while
//! [`MemoryPackage`] inflates a buffer and walks the tar headers itself.

pub mod compression;
pub mod scratch;
pub mod traits;
pub mod ustar;

// Re-export main types for convenience
pub use scratch::ScratchPackage;
pub use traits::EntrySource;
pub use traits::Payload;
pub use traits::RawEntry;
pub use traits::SourceEntry;
pub use traits::StagedFile;
pub use ustar::MemoryPackage;
