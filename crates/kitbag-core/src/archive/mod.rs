//! Source-tree archiving.
//!
//! Walks a directory, prunes excluded top-level directories, keeps files with
//! a given extension, counts their lines and writes them into a zip archive.

pub mod config;
pub mod filters;
pub mod lines;
pub mod report;
pub mod walker;
pub mod writer;

// Re-exports for public API
pub use config::ArchiveConfig;
pub use report::ArchiveObserver;
pub use report::ArchiveSummary;
pub use report::FileEntry;
pub use report::NoopObserver;
pub use report::SkippedFile;
pub use walker::Candidate;
pub use walker::SourceWalker;
pub use writer::create_archive;
