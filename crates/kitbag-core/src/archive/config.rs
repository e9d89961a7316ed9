//! Configuration for source-tree archiving.

use crate::KitError;
use crate::Result;
use std::path::PathBuf;

/// Default archive base name, without the `.zip` suffix.
pub const DEFAULT_DEST_NAME: &str = "PoodleChanBD";

/// Default file extension selected for archiving.
pub const DEFAULT_EXTENSION: &str = ".cs";

/// Top-level directory names pruned by default.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 5] = ["bin", "obj", "properties", ".git", ".vs"];

/// Configuration for a single archiving run.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::ArchiveConfig;
/// use std::path::Path;
///
/// let config = ArchiveConfig::default()
///     .with_source("project")
///     .with_extension("rs")
///     .with_dest_name("sources");
///
/// assert_eq!(config.extension, ".rs");
/// assert_eq!(config.output_path(), Path::new("./sources.zip"));
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Root of the tree to walk.
    ///
    /// Default: `.`.
    pub source: PathBuf,

    /// Archive base name; `.zip` is appended.
    ///
    /// Default: `PoodleChanBD`.
    pub dest_name: String,

    /// Directory the archive is written into.
    ///
    /// Default: `.`.
    pub output_dir: PathBuf,

    /// Top-level directory names to prune, compared case-insensitively.
    ///
    /// Default: `bin`, `obj`, `properties`, `.git`, `.vs`.
    pub excluded_dirs: Vec<String>,

    /// File-name suffix a file needs to be included, always with a leading
    /// dot.
    ///
    /// Default: `.cs`.
    pub extension: String,

    /// Deflate level (1-9), or 0 to store entries uncompressed.
    ///
    /// Default: `6`.
    pub compression_level: u8,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            dest_name: DEFAULT_DEST_NAME.to_string(),
            output_dir: PathBuf::from("."),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(ToString::to_string)
                .collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            compression_level: 6,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new `ArchiveConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source directory.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the archive base name.
    #[must_use]
    pub fn with_dest_name(mut self, name: impl Into<String>) -> Self {
        self.dest_name = name.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the excluded top-level directory names.
    #[must_use]
    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the extension filter. A missing leading dot is added.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
        self
    }

    /// Sets the compression level.
    ///
    /// Out-of-range values are reported by [`validate`](Self::validate).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Full path of the archive this run writes.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.zip", self.dest_name))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is above 9 or the extension
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(KitError::InvalidExtension {
                extension: self.extension.clone(),
            });
        }
        if self.compression_level > 9 {
            return Err(KitError::InvalidCompressionLevel {
                level: self.compression_level,
            });
        }
        Ok(())
    }
}
