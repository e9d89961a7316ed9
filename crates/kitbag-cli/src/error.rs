//! Error conversion utilities for CLI.
//!
//! Converts kitbag-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use kitbag_core::KitError;

/// Converts `KitError` to user-friendly anyhow error with context
pub fn convert_kit_error(err: KitError) -> anyhow::Error {
    match err {
        KitError::SourceNotFound { path } => {
            anyhow!(
                "Source directory '{}' does not exist\n\
                 HINT: Pass an existing directory as SOURCE, or omit it to use the current directory.",
                path.display()
            )
        }
        KitError::SourceNotDirectory { path } => {
            anyhow!(
                "Source '{}' is not a directory\n\
                 HINT: The archive command walks a directory tree; pass its root.",
                path.display()
            )
        }
        KitError::OutputCreate { path, source } => {
            anyhow!(
                "Cannot create archive '{}': {}\n\
                 HINT: Check that --output-dir exists and is writable.",
                path.display(),
                source
            )
        }
        KitError::InvalidAlphabet { reason } => {
            anyhow!(
                "Invalid alphabet: {reason}\n\
                 HINT: Use distinct printable characters without spaces."
            )
        }
        KitError::Io(io_err) => anyhow!("I/O error: {io_err}"),
        _ => anyhow::Error::from(err),
    }
}
