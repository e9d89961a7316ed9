//! ZIP archive creation from a filtered source tree.

use crate::KitError;
use crate::Result;
use crate::archive::config::ArchiveConfig;
use crate::archive::lines::count_lines;
use crate::archive::report::ArchiveObserver;
use crate::archive::report::ArchiveSummary;
use crate::archive::report::FileEntry;
use crate::archive::walker::Candidate;
use crate::archive::walker::SourceWalker;
use std::fs::File;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Archives every matching file under `config.source` into
/// `config.output_path()`.
///
/// The observer sees a directory event before the first file of each
/// contributing directory, one event per archived file, one per skipped file
/// and a final completion event.
///
/// # Examples
///
/// ```no_run
/// use kitbag_core::archive::ArchiveConfig;
/// use kitbag_core::archive::NoopObserver;
/// use kitbag_core::archive::create_archive;
///
/// let config = ArchiveConfig::default().with_source("project");
/// let summary = create_archive(&config, &mut NoopObserver)?;
/// println!(
///     "There are {} lines in {} files",
///     summary.total_lines, summary.total_files
/// );
/// # Ok::<(), kitbag_core::KitError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The source does not exist or is not a directory
/// - The output archive cannot be created
/// - A directory in the tree cannot be read
/// - Writing the archive fails
///
/// A file that cannot be read is skipped and recorded in the summary instead.
pub fn create_archive(
    config: &ArchiveConfig,
    observer: &mut dyn ArchiveObserver,
) -> Result<ArchiveSummary> {
    config.validate()?;
    check_source(&config.source)?;

    let output_path = config.output_path();
    let file = File::create(&output_path).map_err(|source| KitError::OutputCreate {
        path: output_path.clone(),
        source,
    })?;
    let own_archive = output_path.canonicalize().ok();

    let mut summary = ArchiveSummary::new(output_path);
    write_archive(file, config, own_archive.as_deref(), &mut summary, observer)?;
    Ok(summary)
}

fn check_source(source: &Path) -> Result<()> {
    let metadata = std::fs::metadata(source).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KitError::SourceNotFound {
                path: source.to_path_buf(),
            }
        } else {
            KitError::Io(e)
        }
    })?;
    if !metadata.is_dir() {
        return Err(KitError::SourceNotDirectory {
            path: source.to_path_buf(),
        });
    }
    Ok(())
}

/// Writes the archive into any seekable writer.
fn write_archive<W: Write + Seek>(
    writer: W,
    config: &ArchiveConfig,
    own_archive: Option<&Path>,
    summary: &mut ArchiveSummary,
    observer: &mut dyn ArchiveObserver,
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = file_options(config.compression_level);
    let start = Instant::now();
    let mut announced_dir: Option<PathBuf> = None;

    for candidate in SourceWalker::new(&config.source, config).walk() {
        let candidate = candidate?;

        if own_archive.is_some_and(|own| is_same_file(&candidate.path, own)) {
            debug!(path = %candidate.path.display(), "skipping the output archive itself");
            continue;
        }

        let bytes = match std::fs::read(&candidate.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %candidate.path.display(), error = %e, "skipping unreadable file");
                let skipped = summary.skip(candidate.path, e.to_string());
                observer.on_skipped(skipped);
                continue;
            }
        };

        zip.start_file(candidate.archive_name.as_str(), options)
            .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;
        zip.write_all(&bytes)?;

        if announced_dir.as_deref() != Some(candidate.dir.as_path()) {
            observer.on_directory(&candidate.dir);
            announced_dir = Some(candidate.dir.clone());
        }

        let entry = file_entry(candidate, &bytes);
        debug!(archive_name = %entry.archive_name, lines = entry.lines, "archived file");
        observer.on_file(&entry);
        summary.record(entry);
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;

    summary.duration = start.elapsed();
    info!(
        files = summary.total_files,
        lines = summary.total_lines,
        skipped = summary.skipped.len(),
        output = %summary.output_path.display(),
        "archive complete"
    );
    observer.on_complete(summary);

    Ok(())
}

fn file_entry(candidate: Candidate, bytes: &[u8]) -> FileEntry {
    let path = std::path::absolute(&candidate.path).unwrap_or(candidate.path);
    FileEntry {
        path,
        archive_name: candidate.archive_name,
        lines: count_lines(bytes),
        size: bytes.len() as u64,
    }
}

fn file_options(level: u8) -> SimpleFileOptions {
    if level == 0 {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

fn is_same_file(candidate: &Path, own: &Path) -> bool {
    candidate.file_name() == own.file_name()
        && candidate.canonicalize().is_ok_and(|path| path == own)
}
