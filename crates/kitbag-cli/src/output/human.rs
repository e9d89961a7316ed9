//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use kitbag_core::ArchiveSummary;
use kitbag_core::FileEntry;
use kitbag_core::GeneratedKey;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn directory_line(dir: &Path) -> String {
        format!("Directory: {}", dir.display())
    }

    fn file_line(entry: &FileEntry) -> String {
        format!(
            "-- File {} with {} lines of code",
            entry.file_name(),
            entry.lines
        )
    }

    fn summary_line(summary: &ArchiveSummary) -> String {
        format!(
            "There are {} lines in {} files",
            summary.total_lines, summary.total_files
        )
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_key(&self, key: &GeneratedKey) -> Result<()> {
        // The two literals are the product; print them even when quiet.
        self.term.write_line(&key.decrypt_map)?;
        self.term.write_line(&key.pair_set)?;
        Ok(())
    }

    fn format_directory(&self, dir: &Path) {
        if self.quiet {
            return;
        }

        let line = Self::directory_line(dir);
        if self.use_colors {
            let _ = self.term.write_line(&format!("{}", style(line).bold()));
        } else {
            let _ = self.term.write_line(&line);
        }
    }

    fn format_file(&self, entry: &FileEntry) {
        if self.quiet {
            return;
        }

        let _ = self.term.write_line(&Self::file_line(entry));
        if self.verbose {
            let _ = self.term.write_line(&format!(
                "   {} ({})",
                entry.archive_name,
                Self::format_size(entry.size)
            ));
        }
    }

    fn format_archive_result(&self, summary: &ArchiveSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line(&Self::summary_line(summary));

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "  Archive:  {}",
                summary.output_path.display()
            ));
            let _ = self.term.write_line(&format!(
                "  Archived: {}",
                Self::format_size(summary.bytes_written)
            ));
            if summary.has_skipped() {
                let _ = self
                    .term
                    .write_line(&format!("  Skipped:  {}", summary.skipped.len()));
            }
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", summary.duration));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("Error:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("Error: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str, lines: usize) -> FileEntry {
        FileEntry {
            path: PathBuf::from("/work/src").join(name),
            archive_name: format!("src/{name}"),
            lines,
            size: 64,
        }
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(HumanFormatter::format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_directory_line() {
        assert_eq!(
            HumanFormatter::directory_line(Path::new("/work/src")),
            "Directory: /work/src"
        );
    }

    #[test]
    fn test_file_line_uses_file_name() {
        assert_eq!(
            HumanFormatter::file_line(&entry("Program.cs", 42)),
            "-- File Program.cs with 42 lines of code"
        );
    }

    #[test]
    fn test_summary_line() {
        let mut summary = ArchiveSummary::new("out.zip");
        summary.record(entry("a.cs", 3));
        summary.record(entry("b.cs", 5));
        assert_eq!(
            HumanFormatter::summary_line(&summary),
            "There are 8 lines in 2 files"
        );
    }

    #[test]
    fn test_summary_line_empty() {
        let summary = ArchiveSummary::new("out.zip");
        assert_eq!(
            HumanFormatter::summary_line(&summary),
            "There are 0 lines in 0 files"
        );
    }
}
