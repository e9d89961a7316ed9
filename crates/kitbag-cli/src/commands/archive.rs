//! Source tree archiving command.

use crate::cli::ArchiveArgs;
use crate::error::convert_kit_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use kitbag_core::ArchiveConfig;
use kitbag_core::ArchiveObserver;
use kitbag_core::FileEntry;
use kitbag_core::SkippedFile;
use kitbag_core::create_archive;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;

pub fn execute(args: &ArchiveArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = build_config(args);
    debug!(
        source = %config.source.display(),
        output = %config.output_path().display(),
        extension = %config.extension,
        "archiving source tree"
    );

    let mut observer = FormatterObserver { formatter };

    let summary = create_archive(&config, &mut observer).map_err(convert_kit_error)?;
    formatter.format_archive_result(&summary)
}

fn build_config(args: &ArchiveArgs) -> ArchiveConfig {
    let mut config = ArchiveConfig::default()
        .with_source(args.source.clone().unwrap_or_else(|| PathBuf::from(".")))
        .with_dest_name(&args.name)
        .with_output_dir(&args.output_dir)
        .with_extension(&args.ext)
        .with_compression_level(args.compression_level);

    if !args.exclude.is_empty() {
        config = config.with_excluded_dirs(&args.exclude);
    }

    config
}

/// Streams archive progress to the formatter as it happens.
struct FormatterObserver<'a> {
    formatter: &'a dyn OutputFormatter,
}

impl ArchiveObserver for FormatterObserver<'_> {
    fn on_directory(&mut self, dir: &Path) {
        self.formatter.format_directory(dir);
    }

    fn on_file(&mut self, entry: &FileEntry) {
        self.formatter.format_file(entry);
    }

    fn on_skipped(&mut self, skipped: &SkippedFile) {
        self.formatter.format_warning(&format!(
            "skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }
}
