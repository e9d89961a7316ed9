//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use kitbag_core::ArchiveSummary;
use kitbag_core::FileEntry;
use kitbag_core::GeneratedKey;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct KeyOutput {
    alphabet_size: usize,
    decrypt_map: String,
    pair_set: String,
    pairs: Vec<(char, char)>,
}

#[derive(Debug, Serialize)]
struct FileOutput {
    path: String,
    archive_name: String,
    lines: usize,
    size: u64,
}

#[derive(Debug, Serialize)]
struct SkippedOutput {
    path: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct ArchiveOutput {
    output_path: String,
    total_files: usize,
    total_lines: usize,
    bytes_written: u64,
    duration_ms: u128,
    files: Vec<FileOutput>,
    skipped: Vec<SkippedOutput>,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn key_output(key: &GeneratedKey) -> KeyOutput {
        KeyOutput {
            alphabet_size: key.mapping.len(),
            decrypt_map: key.decrypt_map.clone(),
            pair_set: key.pair_set.clone(),
            pairs: key.mapping.pairs().to_vec(),
        }
    }

    fn archive_output(summary: &ArchiveSummary) -> ArchiveOutput {
        ArchiveOutput {
            output_path: summary.output_path.display().to_string(),
            total_files: summary.total_files,
            total_lines: summary.total_lines,
            bytes_written: summary.bytes_written,
            duration_ms: summary.duration.as_millis(),
            files: summary
                .files
                .iter()
                .map(|f| FileOutput {
                    path: f.path.display().to_string(),
                    archive_name: f.archive_name.clone(),
                    lines: f.lines,
                    size: f.size,
                })
                .collect(),
            skipped: summary
                .skipped
                .iter()
                .map(|s| SkippedOutput {
                    path: s.path.display().to_string(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_key(&self, key: &GeneratedKey) -> Result<()> {
        Self::output(&JsonOutput::success("keygen", Self::key_output(key)))
    }

    // Per-file progress is folded into the final document.
    fn format_directory(&self, _dir: &Path) {}

    fn format_file(&self, _entry: &FileEntry) {}

    fn format_archive_result(&self, summary: &ArchiveSummary) -> Result<()> {
        Self::output(&JsonOutput::success(
            "archive",
            Self::archive_output(summary),
        ))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        // Stdout carries exactly one document; warnings go to stderr.
        let output = JsonOutput::warning("archive", message);
        if let Ok(json) = serde_json::to_string(&output) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kitbag_core::Alphabet;
    use kitbag_core::build_key;
    use std::path::PathBuf;

    #[test]
    fn test_key_output_structure() {
        let key = build_key(&Alphabet::new("abc").unwrap(), Some(3));
        let json = serde_json::to_value(JsonOutput::success(
            "keygen",
            JsonFormatter::key_output(&key),
        ))
        .unwrap();

        assert_eq!(json["operation"], "keygen");
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["alphabet_size"], 3);
        assert_eq!(json["data"]["decrypt_map"], key.decrypt_map.as_str());
        assert_eq!(json["data"]["pairs"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_error_output_names_operation() {
        let err = anyhow::anyhow!("Source directory 'gone' does not exist");
        let output = JsonOutput::error("archive", format!("{err:#}"));
        let json = serde_json::to_value(output).unwrap();

        assert_eq!(json["operation"], "archive");
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Source directory 'gone' does not exist");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_archive_output_structure() {
        let mut summary = ArchiveSummary::new("out/PoodleChanBD.zip");
        summary.record(FileEntry {
            path: PathBuf::from("/src/a.cs"),
            archive_name: "a.cs".into(),
            lines: 4,
            size: 40,
        });
        summary.skip("/src/b.cs", "permission denied");

        let json = serde_json::to_value(JsonFormatter::archive_output(&summary)).unwrap();
        assert_eq!(json["total_files"], 1);
        assert_eq!(json["total_lines"], 4);
        assert_eq!(json["files"][0]["archive_name"], "a.cs");
        assert_eq!(json["skipped"][0]["reason"], "permission denied");
    }
}
