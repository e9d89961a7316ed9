//! Archiving run reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// One file included in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path inside the archive, relative to the source root, `/`-separated.
    pub archive_name: String,
    /// Number of lines in the file.
    pub lines: usize,
    /// Size in bytes.
    pub size: u64,
}

impl FileEntry {
    /// File name component, for display.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.archive_name.clone(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// A candidate file that could not be read and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Why the file was skipped.
    pub reason: String,
}

/// Aggregate result of an archiving run.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::ArchiveSummary;
/// use kitbag_core::archive::FileEntry;
/// use std::path::PathBuf;
///
/// let mut summary = ArchiveSummary::new("out.zip");
/// summary.record(FileEntry {
///     path: PathBuf::from("/src/a.cs"),
///     archive_name: "a.cs".into(),
///     lines: 12,
///     size: 240,
/// });
///
/// assert_eq!(summary.total_files, 1);
/// assert_eq!(summary.total_lines, 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveSummary {
    /// Path of the archive written.
    pub output_path: PathBuf,

    /// Number of files included.
    pub total_files: usize,

    /// Sum of line counts of included files.
    pub total_lines: usize,

    /// Uncompressed bytes written into the archive.
    pub bytes_written: u64,

    /// Included files, in walk order.
    pub files: Vec<FileEntry>,

    /// Candidate files that could not be read.
    pub skipped: Vec<SkippedFile>,

    /// Duration of the run.
    pub duration: Duration,
}

impl ArchiveSummary {
    /// Creates an empty summary for the given output path.
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Adds an included file to the running totals.
    pub fn record(&mut self, entry: FileEntry) {
        self.total_files += 1;
        self.total_lines += entry.lines;
        self.bytes_written += entry.size;
        self.files.push(entry);
    }

    /// Records a skipped file and returns the stored record.
    pub fn skip(
        &mut self,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> &SkippedFile {
        self.skipped.push(SkippedFile {
            path: path.into(),
            reason: reason.into(),
        });
        &self.skipped[self.skipped.len() - 1]
    }

    /// Returns whether any files were skipped.
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Receives events while an archive is being built.
///
/// All methods default to doing nothing.
pub trait ArchiveObserver {
    /// Called once per directory, before its first included file.
    fn on_directory(&mut self, _dir: &Path) {}

    /// Called after a file has been written to the archive.
    fn on_file(&mut self, _entry: &FileEntry) {}

    /// Called when a candidate file could not be read.
    fn on_skipped(&mut self, _skipped: &SkippedFile) {}

    /// Called once the archive is finished.
    fn on_complete(&mut self, _summary: &ArchiveSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl ArchiveObserver for NoopObserver {}
