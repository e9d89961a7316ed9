//! Directory tree walking with pruning and extension filtering.
//!
//! Siblings are visited files first, then subdirectories, each group sorted by
//! name. That keeps every directory's files contiguous in the output so a
//! directory header can be emitted exactly once.

use crate::KitError;
use crate::Result;
use crate::archive::config::ArchiveConfig;
use crate::archive::filters;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// Walks a source tree, yielding only files that pass the filters.
///
/// # Examples
///
/// ```no_run
/// use kitbag_core::archive::ArchiveConfig;
/// use kitbag_core::archive::walker::SourceWalker;
///
/// let config = ArchiveConfig::default().with_source("./project");
/// let walker = SourceWalker::new(&config.source, &config);
///
/// for candidate in walker.walk() {
///     let candidate = candidate?;
///     println!("Would add: {}", candidate.archive_name);
/// }
/// # Ok::<(), kitbag_core::KitError>(())
/// ```
pub struct SourceWalker<'a> {
    root: &'a Path,
    config: &'a ArchiveConfig,
}

impl<'a> SourceWalker<'a> {
    /// Creates a walker rooted at `root`.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a ArchiveConfig) -> Self {
        Self { root, config }
    }

    /// Returns an iterator over candidate files.
    ///
    /// Excluded top-level directories are pruned without being read.
    /// Symlinked directories are not followed; symlinks to files are
    /// treated as files.
    ///
    /// # Errors
    ///
    /// Entries error if a directory cannot be read.
    pub fn walk(&self) -> impl Iterator<Item = Result<Candidate>> + 'a {
        let root = self.root;
        let config = self.config;

        WalkDir::new(root)
            .follow_links(false)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_entry(move |entry| !is_pruned(entry, root, config))
            .filter_map(move |entry| match entry {
                Ok(entry) => build_candidate(&entry, root, config).map(Ok),
                Err(e) => Some(Err(KitError::Io(std::io::Error::other(format!(
                    "walkdir error: {e}"
                ))))),
            })
    }
}

/// A file selected by the walker, not yet read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path as walked (source root joined with the relative path).
    pub path: PathBuf,

    /// Path relative to the source root.
    pub relative: PathBuf,

    /// `/`-separated archive-internal name.
    pub archive_name: String,

    /// Directory containing the file, as walked.
    pub dir: PathBuf,
}

fn is_pruned(entry: &DirEntry, root: &Path, config: &ArchiveConfig) -> bool {
    if entry.depth() != 1 || !entry.file_type().is_dir() {
        return false;
    }
    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let pruned = filters::is_excluded_dir(relative, config);
    if pruned {
        debug!(dir = %entry.path().display(), "pruning excluded directory");
    }
    pruned
}

fn build_candidate(entry: &DirEntry, root: &Path, config: &ArchiveConfig) -> Option<Candidate> {
    let is_file =
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
    if !is_file || !filters::matches_extension(entry.file_name(), config) {
        return None;
    }

    let path = entry.path().to_path_buf();
    let relative = path.strip_prefix(root).unwrap_or(path.as_path()).to_path_buf();
    let archive_name = filters::archive_name(&relative);
    let dir = path.parent().map_or_else(|| root.to_path_buf(), Path::to_path_buf);

    Some(Candidate {
        path,
        relative,
        archive_name,
        dir,
    })
}
