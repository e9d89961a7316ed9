//! Error types for key generation and archiving operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `KitError`.
pub type Result<T> = std::result::Result<T, KitError>;

/// Errors that can occur while generating keys or building archives.
#[derive(Error, Debug)]
pub enum KitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source path exists but is not a directory.
    #[error("source is not a directory: {path}")]
    SourceNotDirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// Output archive could not be created.
    #[error("cannot create output archive {path}: {source}")]
    OutputCreate {
        /// Path of the archive that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Alphabet violates the uniqueness or printability rules.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet {
        /// Why the alphabet was rejected.
        reason: String,
    },

    /// A set of pairs does not form a bijection over its alphabet.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected.
        reason: String,
    },

    /// A rendered key literal could not be parsed.
    #[error("malformed literal at offset {offset}: {reason}")]
    MalformedLiteral {
        /// Character offset where parsing failed.
        offset: usize,
        /// What the parser expected.
        reason: String,
    },

    /// Extension filter is empty.
    #[error("invalid extension {extension:?}, must name a suffix after the dot")]
    InvalidExtension {
        /// The rejected extension.
        extension: String,
    },

    /// Compression level outside the accepted range.
    #[error("invalid compression level {level}, must be 0-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl KitError {
    /// Returns `true` if this error comes from accessing the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitbag_core::KitError;
    /// use std::path::PathBuf;
    ///
    /// let err = KitError::SourceNotFound {
    ///     path: PathBuf::from("missing"),
    /// };
    /// assert!(err.is_filesystem());
    ///
    /// let err = KitError::InvalidCompressionLevel { level: 12 };
    /// assert!(!err.is_filesystem());
    /// ```
    #[must_use]
    pub const fn is_filesystem(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::SourceNotFound { .. }
                | Self::SourceNotDirectory { .. }
                | Self::OutputCreate { .. }
        )
    }

    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::SourceNotFound { path }
            | Self::SourceNotDirectory { path }
            | Self::OutputCreate { path, .. } => Some(path),
            _ => None,
        }
    }
}
