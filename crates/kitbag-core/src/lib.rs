//! Substitution key generation and filtered source-tree archiving.
//!
//! `kitbag-core` provides two independent utilities:
//!
//! - [`keygen`]: a random bijection over a fixed printable alphabet, rendered
//!   as a decrypt map and a pair set that always parse back;
//! - [`archive`]: a walk over a source tree that zips every file with a given
//!   extension outside excluded top-level directories, counting lines as it
//!   goes.
//!
//! # Examples
//!
//! ```no_run
//! use kitbag_core::ArchiveConfig;
//! use kitbag_core::NoopObserver;
//! use kitbag_core::create_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArchiveConfig::default().with_source("project");
//! let summary = create_archive(&config, &mut NoopObserver)?;
//! println!("Archived {} files", summary.total_files);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod error;
pub mod keygen;

// Re-export main API types
pub use archive::ArchiveConfig;
pub use archive::ArchiveObserver;
pub use archive::ArchiveSummary;
pub use archive::FileEntry;
pub use archive::NoopObserver;
pub use archive::SkippedFile;
pub use archive::create_archive;
pub use error::KitError;
pub use error::Result;
pub use keygen::Alphabet;
pub use keygen::GeneratedKey;
pub use keygen::KeyMapping;
pub use keygen::build_key;
