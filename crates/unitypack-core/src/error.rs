//! Error types for package unpacking operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `UnpackError`.
pub type Result<T> = std::result::Result<T, UnpackError>;

/// Errors that can occur while unpacking a `.unitypackage`.
#[derive(Error, Debug)]
pub enum UnpackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input package does not exist.
    ///
    /// Raised before any decoding is attempted and never wrapped in
    /// [`UnpackError::Extraction`].
    #[error("input package not found: {path}")]
    InputNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The gzip envelope or the tar stream inside it is malformed.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// An identifier folder has no `pathname` member (strict mode only).
    #[error("identifier {identifier} has no pathname entry")]
    IncompleteGroup {
        /// The identifier folder name.
        identifier: String,
    },

    /// An unpack operation failed; wraps the underlying cause.
    #[error("failed to extract package: {source}")]
    Extraction {
        /// The error that aborted the operation.
        #[source]
        source: Box<UnpackError>,
    },
}

impl UnpackError {
    /// Wraps an error raised inside an unpack operation.
    ///
    /// Errors that are already wrapped, and [`UnpackError::InputNotFound`],
    /// are returned unchanged so the prefix is applied exactly once.
    #[must_use]
    pub fn extraction(err: Self) -> Self {
        match err {
            Self::Extraction { .. } | Self::InputNotFound { .. } => err,
            other => Self::Extraction {
                source: Box::new(other),
            },
        }
    }

    /// Returns the innermost error, looking through [`UnpackError::Extraction`].
    ///
    /// # Examples
    ///
    /// ```
    /// use unitypack_core::UnpackError;
    ///
    /// let err = UnpackError::extraction(UnpackError::InvalidArchive("bad magic".into()));
    /// assert!(matches!(err.root_cause(), UnpackError::InvalidArchive(_)));
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Extraction { source } => source.root_cause(),
            other => other,
        }
    }

    /// Returns `true` if the input package was missing.
    #[must_use]
    pub fn is_input_not_found(&self) -> bool {
        matches!(self.root_cause(), Self::InputNotFound { .. })
    }

    /// Returns `true` if the archive itself could not be decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitypack_core::UnpackError;
    /// use std::path::PathBuf;
    ///
    /// let err = UnpackError::extraction(UnpackError::InvalidArchive("truncated header".into()));
    /// assert!(err.is_malformed_archive());
    ///
    /// let err = UnpackError::InputNotFound {
    ///     path: PathBuf::from("missing.unitypackage"),
    /// };
    /// assert!(!err.is_malformed_archive());
    /// ```
    #[must_use]
    pub fn is_malformed_archive(&self) -> bool {
        matches!(self.root_cause(), Self::InvalidArchive(_))
    }

    /// Returns the context string for this error, if available.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self.root_cause() {
            Self::InvalidArchive(msg) => Some(msg),
            Self::IncompleteGroup { identifier } => Some(identifier),
            _ => None,
        }
    }
}
