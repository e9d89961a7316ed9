//! Path filtering logic for source-tree archiving.
//!
//! Paths are always compared component by component, never by splitting on a
//! separator character, so the same rules hold on every platform.

use crate::archive::config::ArchiveConfig;
use std::ffi::OsStr;
use std::path::Component;
use std::path::Path;

/// Returns the first normal component of a relative path.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::filters;
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// assert_eq!(filters::top_segment(Path::new("bin/Debug")), Some(OsStr::new("bin")));
/// assert_eq!(filters::top_segment(Path::new("./src")), Some(OsStr::new("src")));
/// assert_eq!(filters::top_segment(Path::new("")), None);
/// ```
#[must_use]
pub fn top_segment(relative: &Path) -> Option<&OsStr> {
    relative.components().find_map(|component| match component {
        Component::Normal(name) => Some(name),
        _ => None,
    })
}

/// Checks whether a directory (relative to the source root) lies in an
/// excluded top-level subtree.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::ArchiveConfig;
/// use kitbag_core::archive::filters;
/// use std::path::Path;
///
/// let config = ArchiveConfig::default();
/// assert!(filters::is_excluded_dir(Path::new("Bin"), &config));
/// assert!(filters::is_excluded_dir(Path::new("obj/Release"), &config));
/// assert!(!filters::is_excluded_dir(Path::new("src/bin"), &config));
/// ```
#[must_use]
pub fn is_excluded_dir(relative: &Path, config: &ArchiveConfig) -> bool {
    let Some(top) = top_segment(relative).and_then(OsStr::to_str) else {
        return false;
    };
    let top = top.to_lowercase();
    config
        .excluded_dirs
        .iter()
        .any(|excluded| excluded.to_lowercase() == top)
}

/// Checks whether a file name ends with the configured extension.
///
/// The comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::ArchiveConfig;
/// use kitbag_core::archive::filters;
/// use std::ffi::OsStr;
///
/// let config = ArchiveConfig::default();
/// assert!(filters::matches_extension(OsStr::new("Program.cs"), &config));
/// assert!(!filters::matches_extension(OsStr::new("Program.CS"), &config));
/// assert!(!filters::matches_extension(OsStr::new("notes.txt"), &config));
/// ```
#[must_use]
pub fn matches_extension(name: &OsStr, config: &ArchiveConfig) -> bool {
    name.as_encoded_bytes().ends_with(config.extension.as_bytes())
}

/// Builds the archive-internal name for a path relative to the source root.
///
/// Components are joined with `/`, as the zip format requires.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::filters;
/// use std::path::Path;
///
/// assert_eq!(filters::archive_name(Path::new("src/a.ext")), "src/a.ext");
/// assert_eq!(filters::archive_name(Path::new("./a.ext")), "a.ext");
/// ```
#[must_use]
pub fn archive_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
